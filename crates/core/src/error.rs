// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// True for failures raised before any remote call was attempted
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Domain(_))
    }
}
