// ---------------------------------------------------------------------------
// POST /upload — scan an uploaded source file
// ---------------------------------------------------------------------------

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::model::ScanReport;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Accepts a single multipart file, stages it to disk, scans its text
/// against the catalog, and responds with the matches.
///
/// Persisting the matches to the ledger store and deleting the staged
/// file both happen after the response, in a spawned task; their
/// failures are logged only and callers never observe them.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ScanReport>, ApiError> {
    let payload = read_file_field(&mut multipart).await?;

    let path = stage_upload(&state.upload_dir, &payload).await?;

    // Read the staged bytes back as text. Non-UTF-8 content surfaces
    // here as the read-failure path.
    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "failed to read uploaded file");
            remove_upload(&path).await;
            return Err(ApiError::UploadRead);
        }
    };

    let matches = state.matcher.scan(&text);
    info!(bytes = payload.len(), matches = matches.len(), "upload scanned");

    let ledger = state.ledger.clone();
    let collection = state.collection.clone();
    let persisted = matches.clone();
    tokio::spawn(async move {
        if let Err(e) = ledger.append(&collection, &persisted).await {
            warn!(error = %e, store = ledger.name(), "failed to record scan matches");
        }
        remove_upload(&path).await;
    });

    Ok(Json(ScanReport::new(matches)))
}

/// Pulls the bytes of the `file` field out of the multipart body.
async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            return field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("failed to read multipart field: {e}")));
        }
    }

    Err(ApiError::BadRequest("multipart field 'file' is required".into()))
}

/// Writes the payload to a uniquely-named file under the upload
/// directory.
async fn stage_upload(upload_dir: &Path, payload: &[u8]) -> Result<PathBuf, ApiError> {
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to create upload directory: {e}")))?;

    let path = upload_dir.join(format!("upload-{}", Uuid::new_v4()));
    tokio::fs::write(&path, payload)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to stage uploaded file: {e}")))?;

    Ok(path)
}

async fn remove_upload(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        warn!(error = %e, path = %path.display(), "failed to delete uploaded file");
    }
}
