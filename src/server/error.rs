// ---------------------------------------------------------------------------
// API error types
// ---------------------------------------------------------------------------

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 Bad Request — missing file field or malformed multipart.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 500 Internal Server Error — the uploaded file could not be read
    /// as text. The body is the fixed generic payload callers rely on.
    #[error("failed to read the uploaded file")]
    UploadRead,
    /// 500 Internal Server Error — anything else.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UploadRead => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read the uploaded file".to_string(),
            ),
            ApiError::Internal(msg) => {
                // Log the real error server-side, return a generic message
                // to the client.
                tracing::error!(details = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}
