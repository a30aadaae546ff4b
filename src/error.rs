// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Generic failure text returned to the caller on a 500. Upstream detail is
/// logged but never forwarded.
pub const GENERIC_FAILURE_REPLY: &str = "काहीतरी चूक झाली. पुन्हा प्रयत्न करा.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("upstream completion call failed: {0}")]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "chat completion request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_REPLY.to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
