//! Error types for the calport crates.

use thiserror::Error;

/// Errors that can occur in calport operations.
#[derive(Error, Debug)]
pub enum CalportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calport operations.
pub type CalportResult<T> = Result<T, CalportError>;
