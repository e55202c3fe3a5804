//! SDK Error Types

use thiserror::Error;
use trigctl_core::AppError;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SdkError::Decode(e.to_string())
        } else if e.is_timeout() {
            SdkError::Transport(format!("request timed out: {}", e))
        } else if e.is_builder() {
            SdkError::InvalidUrl(e.to_string())
        } else if e.is_connect() {
            SdkError::Connection(e.to_string())
        } else {
            SdkError::Transport(e.to_string())
        }
    }
}

impl From<SdkError> for AppError {
    fn from(e: SdkError) -> Self {
        match e {
            SdkError::NotFound(what) => AppError::NotFound(what),
            SdkError::InvalidUrl(msg) => AppError::Config(format!("Invalid server URL: {}", msg)),
            other => AppError::Remote(other.to_string()),
        }
    }
}
