//! Error types for fundweb-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A collection fetch failed
    FetchFailed,
    /// A create or delete request failed
    MutationFailed,
    /// Input rejected before reaching the backend
    ValidationError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::FetchFailed => write!(f, "FETCH_FAILED"),
            ErrorCode::MutationFailed => write!(f, "MUTATION_FAILED"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
        }
    }
}

/// Main error type for fundweb-core
///
/// Every failure ends up as a human-readable message on screen; the code
/// is only carried so the JSON API can stay machine-checkable.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Fetch failed: {message}")]
    Fetch { message: String },

    #[error("Mutation failed: {message}")]
    Mutation { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Fetch { .. } => ErrorCode::FetchFailed,
            CoreError::Mutation { .. } => ErrorCode::MutationFailed,
            CoreError::Validation { .. } => ErrorCode::ValidationError,
        }
    }
}
