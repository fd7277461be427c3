//! Error types for calls to the flashcards API

use thiserror::Error;

/// Failures of a single request. None of them are fatal to the widget.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;
