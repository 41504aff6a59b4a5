//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Logveil error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum LogveilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for LogveilError {
    fn from(err: std::io::Error) -> Self {
        LogveilError::Io(err.to_string())
    }
}
