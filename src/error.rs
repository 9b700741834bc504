//! Error types for the mintscan service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Client omitted the mint query parameter
    #[error("Missing token mint address")]
    BadRequest,

    /// Metadata lookup yielded no record for the mint
    #[error("Token not found")]
    NotFound,

    /// An upstream data API failed or returned an error status.
    ///
    /// Only fatal for the metadata lookup; every other call site catches
    /// this and substitutes a default so the response stays as complete as
    /// the available data allows.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// An upstream response could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            AppError::BadRequest => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing token mint address" }),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Token not found" }),
            ),
            AppError::Config(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Server error", "details": e.to_string() }),
            ),
            AppError::Upstream(msg) | AppError::Parse(msg) | AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Server error", "details": msg }),
            ),
        };

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error_type = %self, status_code = %status_code, "Request error");
        }

        (status_code, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
