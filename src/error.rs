//! HTTP-facing error types
//!
//! Handler failures map to a 500 with a JSON `{"detail": ...}` body
//! carrying the error's display text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::llm::CompletionError;

/// Errors a request handler can surface to the client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server started without a Groq credential
    #[error("Groq client not initialized. Check server logs.")]
    ClientNotConfigured,

    /// The upstream completion call failed
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Handler result alias
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::ClientNotConfigured => {
                tracing::error!("Debate request refused: no completion provider configured")
            }
            ApiError::Completion(err) => tracing::error!("Completion call failed: {}", err),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
