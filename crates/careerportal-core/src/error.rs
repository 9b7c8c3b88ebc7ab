//! Error types for the Career Portal core library.

use thiserror::Error;

use crate::api::ApiError;
use crate::validation::ValidationErrors;

/// Result type alias using the core Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Career Portal operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session storage could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Form input rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Backend call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
