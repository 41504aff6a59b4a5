//! Structured logging setup using tracing
//!
//! Console logging with configurable level and optional JSON formatting.
//! Configuration-time warnings (e.g. corrected `bits` values) are routed
//! through this subscriber, so it must be initialized before the engine is
//! created.
//!
//! # Example
//!
//! ```no_run
//! use logveil::logging::init_logging;
//!
//! init_logging("info", false).expect("Failed to initialize logging");
//! tracing::info!("started");
//! ```

use crate::domain::{LogveilError, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// Sets up a console subscriber honoring `RUST_LOG` when present, falling
/// back to the configured level for this crate's targets.
///
/// # Errors
///
/// Returns an error if the level string is not recognized or a global
/// subscriber is already installed.
pub fn init_logging(log_level_str: &str, json: bool) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("logveil={}", log_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| LogveilError::Configuration(format!("Failed to set subscriber: {e}")))?;

    tracing::debug!(level = %log_level, json, "Logging initialized");
    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LogveilError::Configuration(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}
