// Logveil - IPv4 log anonymizer
// Copyright (c) 2026 Logveil Contributors
// Licensed under the MIT License

//! # Logveil - IPv4 log anonymizer
//!
//! Logveil scans log-message byte buffers for embedded IPv4 dotted-quad
//! tokens and rewrites each found address according to a configured
//! anonymization policy. In `random-consistent` mode a given original
//! address always maps to the same anonymized address for the lifetime of
//! the engine, so correlations within a log stream survive anonymization.
//!
//! ## Architecture
//!
//! - [`anonymization`] - Scanner, masking policies, consistency cache, and
//!   the per-message engine
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - TOML configuration with environment overrides
//! - [`domain`] - Error hierarchy and shared result alias
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```
//! use logveil::anonymization::{AnonymizationConfig, AnonymizationEngine, AnonymizationMode};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = AnonymizationConfig {
//!     mode: AnonymizationMode::Zero,
//!     bits: 8,
//!     replacement_char: 'x',
//! };
//! let engine = AnonymizationEngine::new(&config)?;
//!
//! // A rewritten copy is returned only when something matched
//! let out = engine.anonymize_message(b"conn from 192.168.1.5 ok");
//! assert_eq!(out.as_deref(), Some(&b"conn from 192.168.1.0 ok"[..]));
//!
//! // Messages without addresses come back as None: keep the original
//! assert!(engine.anonymize_message(b"nothing to see").is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Anonymization modes
//!
//! | Mode | Effect |
//! |------|--------|
//! | `zero` | clears the low `bits` bits of the address |
//! | `random` | replaces the low `bits` bits with a fresh random value |
//! | `random-consistent` | like `random`, with a stable per-address mapping |
//! | `simple` | overwrites trailing octet digits with a replacement character |
//!
//! ## Error Handling
//!
//! Fallible operations use [`domain::LogveilError`]; the per-message
//! transform itself is infallible.
//!
//! ## Logging
//!
//! Logveil uses structured logging with the `tracing` crate. Configuration
//! corrections (out-of-range `bits`) are warned about exactly once, at
//! engine creation time, never per message.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
