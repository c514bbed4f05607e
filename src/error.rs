// src/error.rs
use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;

use crate::message::ErrorResponse;

pub const OLLAMA_HINT: &str =
    "Make sure Ollama is running locally and the selected model is installed";

/// Failures of a single chat call. None of these are retried.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The caller's input was rejected before any network call.
    #[error("{0}")]
    Validation(String),
    /// Ollama answered with an explicit error or a malformed payload.
    #[error("{0}")]
    Upstream(String),
    /// The inference server could not be reached at all.
    #[error("{0}")]
    Network(String),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        tracing::error!("chat request failed: {self}");
        let body = ErrorResponse {
            error: "Failed to process request".to_string(),
            details: self.to_string(),
            hint: OLLAMA_HINT.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
