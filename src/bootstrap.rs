//! Startup seeding of the ledger store.
//!
//! On server start the full catalog is best-effort appended to the
//! store: probe the gateway first, seed on success, and log-only on any
//! failure. The process keeps serving either way.

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::ledger::LedgerStore;

pub async fn seed_catalog(ledger: &dyn LedgerStore, catalog: &Catalog, collection: &str) {
    if let Err(e) = ledger.probe().await {
        warn!(error = %e, store = ledger.name(), "gateway unreachable; skipping catalog seed");
        return;
    }
    info!(store = ledger.name(), "connected to ledger gateway");

    match ledger.append(collection, catalog.records()).await {
        Ok(()) => info!(records = catalog.len(), collection, "seeded vulnerability catalog"),
        Err(e) => warn!(error = %e, collection, "failed to seed vulnerability catalog"),
    }
}
