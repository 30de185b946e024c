// ---------------------------------------------------------------------------
// Upload service
// ---------------------------------------------------------------------------
//
// Exposes the catalog matcher over a single HTTP endpoint.

pub mod error;
mod routes;
pub mod state;

pub use routes::build_router;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::bootstrap;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::ledger::{HttpLedger, LedgerStore};
use crate::matcher::Matcher;
use state::AppState;

/// Start the upload service and block until shutdown (Ctrl+C).
pub async fn start_server(config: &Config, catalog: Catalog) -> anyhow::Result<()> {
    let catalog = Arc::new(catalog);
    let ledger: Arc<dyn LedgerStore> = Arc::new(HttpLedger::new(
        &config.ledger_gateway,
        Duration::from_secs(config.ledger_timeout_secs),
    )?);

    let state = Arc::new(AppState::new(
        Matcher::new(catalog.clone()),
        ledger.clone(),
        config.upload_dir.clone(),
        config.collection.clone(),
    ));

    // Best-effort seed of the ledger store, off the serving path.
    if config.seed_on_start {
        let collection = config.collection.clone();
        tokio::spawn(async move {
            bootstrap::seed_catalog(ledger.as_ref(), &catalog, &collection).await;
        });
    }

    let app = build_router(state, config.max_upload_bytes);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "upload service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("upload service shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
