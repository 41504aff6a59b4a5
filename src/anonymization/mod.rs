//! IPv4 anonymization core
//!
//! This module scans log-message byte buffers for embedded dotted-quad
//! tokens and rewrites each match according to the configured policy.
//!
//! Components:
//! - [`codec`] - dotted-quad text to 32-bit address conversion
//! - [`scanner`] - token recognition at a byte offset
//! - [`policy`] - zero, random, and simple masking transforms
//! - [`cache`] - consistent original-to-anonymized mapping
//! - [`rewriter`] - variable-length in-buffer substitution
//! - [`engine`] - the per-message driver tying it all together

pub mod config;
pub mod engine;
pub mod policy;

mod cache;
mod codec;
mod rewriter;
mod scanner;

// Re-export commonly used items
pub use config::{AnonymizationConfig, AnonymizationMode};
pub use engine::AnonymizationEngine;
pub use policy::{MaskMode, MaskPolicy};
