//! Configuration management for Logveil.
//!
//! TOML-based configuration loading, parsing, and validation with
//! `LOGVEIL_*` environment variable overrides.
//!
//! # Example Configuration
//!
//! ```toml
//! [anonymization]
//! mode = "random-consistent"
//! bits = 16
//! replacement_char = "x"
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{LoggingConfig, LogveilConfig};
