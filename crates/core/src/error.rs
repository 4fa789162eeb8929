// Central Error Type for the Application

use thiserror::Error;

use crate::codec::DecodeError;
use crate::domain::ValidationError;
use crate::port::StorageError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Import failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Message suitable for an alert: the inner error's text without the
    /// category prefix for user-correctable failures
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
