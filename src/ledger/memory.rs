use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::model::VulnerabilityRecord;

use super::LedgerStore;

/// In-memory ledger store for tests and offline runs.
///
/// Keeps every append as a separate batch so tests can distinguish "one
/// append of zero records" from "no append at all".
pub struct MemoryLedger {
    reachable: bool,
    batches: Mutex<HashMap<String, Vec<Vec<VulnerabilityRecord>>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self {
            reachable: true,
            batches: Mutex::new(HashMap::new()),
        }
    }

    /// A store whose probe and append always fail, for exercising the
    /// degraded-mode paths.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            batches: Mutex::new(HashMap::new()),
        }
    }

    /// Number of append calls made against `collection`.
    pub async fn append_count(&self, collection: &str) -> usize {
        self.batches
            .lock()
            .await
            .get(collection)
            .map(|batches| batches.len())
            .unwrap_or(0)
    }

    /// All records appended to `collection`, flattened in append order.
    pub async fn records(&self, collection: &str) -> Vec<VulnerabilityRecord> {
        self.batches
            .lock()
            .await
            .get(collection)
            .map(|batches| batches.iter().flatten().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    fn name(&self) -> &'static str {
        "in-memory ledger"
    }

    async fn probe(&self) -> Result<()> {
        if !self.reachable {
            bail!("ledger gateway unreachable");
        }
        Ok(())
    }

    async fn append(&self, collection: &str, records: &[VulnerabilityRecord]) -> Result<()> {
        if !self.reachable {
            bail!("ledger gateway unreachable");
        }
        self.batches
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(records.to_vec());
        Ok(())
    }
}
