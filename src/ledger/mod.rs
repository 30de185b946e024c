//! Append-only ledger store collaborators.
//!
//! The service records scan matches to an external ledger-backed store.
//! The store is reached through [`LedgerStore`], a minimal seam with a
//! connectivity probe and an append operation, so handler and bootstrap
//! logic can be exercised without a network.

mod http;
mod memory;

pub use http::HttpLedger;
pub use memory::MemoryLedger;

use crate::model::VulnerabilityRecord;
use anyhow::Result;
use async_trait::async_trait;

/// An external append-only store for vulnerability records.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Human-readable name of the store, for logging.
    fn name(&self) -> &'static str;

    /// Checks connectivity to the store's gateway.
    async fn probe(&self) -> Result<()>;

    /// Appends `records` to the named collection.
    async fn append(&self, collection: &str, records: &[VulnerabilityRecord]) -> Result<()>;
}
