// ---------------------------------------------------------------------------
// Route registration
// ---------------------------------------------------------------------------

mod upload;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::server::state::AppState;

/// Per-request deadline. Uploads are read fully into memory and the
/// scan is a single linear pass, so anything slower than this is a
/// stalled client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn build_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/upload", post(upload::upload_file))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}
