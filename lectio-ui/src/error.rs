//! API error type for lectio-ui
//!
//! Every failure surfaces as a structured `{ "error": true, "message" }`
//! payload; responses are never cacheable since content is date-keyed.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Every upstream candidate failed (503)
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// lectio-common error
    #[error("{0}")]
    Common(#[from] lectio_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Other(ref err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Common(err) => match err {
                lectio_common::Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
                lectio_common::Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
                other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
            },
        };

        tracing::error!(status = %status, "{}", message);

        let body = Json(json!({
            "error": true,
            "message": message,
        }));

        (
            status,
            [
                (
                    header::CACHE_CONTROL,
                    "no-store, no-cache, must-revalidate",
                ),
                (header::PRAGMA, "no-cache"),
            ],
            body,
        )
            .into_response()
    }
}
