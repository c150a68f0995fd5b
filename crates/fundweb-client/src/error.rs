//! Error types for the backend client.

use thiserror::Error;

/// Errors that can occur when talking to the donation platform backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned an error response
    #[error("Backend error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Backend is offline or unreachable
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    /// Invalid backend base URL
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a backend response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for backend client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
