//! Configuration schema
//!
//! Type-safe structs for the `logveil.toml` configuration file. Every field
//! has a default so a minimal (even empty) file is valid.

use crate::anonymization::AnonymizationConfig;
use crate::domain::{LogveilError, Result};
use serde::{Deserialize, Serialize};

/// Top-level Logveil configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogveilConfig {
    /// IPv4 anonymization settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LogveilConfig {
    /// Validate the configuration.
    ///
    /// Out-of-range `bits` values are deliberately not rejected here; the
    /// engine corrects them with a warning at creation time.
    pub fn validate(&self) -> Result<()> {
        if !self.anonymization.replacement_char.is_ascii() {
            return Err(LogveilError::Configuration(format!(
                "replacement_char must be a single ASCII character, got '{}'",
                self.anonymization.replacement_char
            )));
        }
        self.logging.validate()?;
        Ok(())
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Validate the logging configuration
    pub fn validate(&self) -> Result<()> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(LogveilError::Configuration(format!(
                "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
            ))),
        }
    }
}
