use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::VulnerabilityRecord;

use super::LedgerStore;

/// Ledger store reached over a JSON HTTP gateway.
///
/// The probe hits `GET {gateway}/info`; appends go to
/// `POST {gateway}/collections/{name}` with the records as a JSON array.
pub struct HttpLedger {
    client: reqwest::Client,
    gateway: String,
}

impl HttpLedger {
    pub fn new(gateway: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let gateway = gateway.into().trim_end_matches('/').to_string();
        Ok(Self { client, gateway })
    }
}

#[async_trait]
impl LedgerStore for HttpLedger {
    fn name(&self) -> &'static str {
        "ledger gateway"
    }

    async fn probe(&self) -> Result<()> {
        self.client
            .get(format!("{}/info", self.gateway))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn append(&self, collection: &str, records: &[VulnerabilityRecord]) -> Result<()> {
        self.client
            .post(format!("{}/collections/{}", self.gateway, collection))
            .json(&records)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
