//! Result type alias for Logveil

use super::errors::LogveilError;

/// Result type alias for Logveil operations
///
/// Convenience alias using [`LogveilError`] as the error type.
pub type Result<T> = std::result::Result<T, LogveilError>;
