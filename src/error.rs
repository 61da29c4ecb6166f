//! Error types for Achtung Core.
//!
//! Classification itself cannot fail; these errors come from request
//! validation and the rewrite collaborator.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::engine::RewriteError;

/// Unified error type for Achtung operations.
#[derive(Debug, Error)]
pub enum AchtungError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AchtungError {
    fn parts(&self) -> (StatusCode, &'static str, String, Option<String>) {
        match self {
            AchtungError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AchtungError::Rewrite(RewriteError::Disabled) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "REWRITE_UNAVAILABLE",
                "Rewriting is not available".to_string(),
                None,
            ),
            AchtungError::Rewrite(e @ RewriteError::Timeout(_)) => (
                StatusCode::GATEWAY_TIMEOUT,
                "REWRITE_TIMEOUT",
                "The rewrite service did not answer in time".to_string(),
                Some(e.to_string()),
            ),
            AchtungError::Rewrite(e) => {
                // Upstream bodies may echo the submitted text; keep them out of responses
                tracing::error!(error = %e, "Rewrite failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "REWRITE_FAILED",
                    "The rewrite service failed".to_string(),
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AchtungError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for Achtung operations.
pub type AchtungResult<T> = Result<T, AchtungError>;
