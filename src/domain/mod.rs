//! Core domain types
//!
//! This module holds the error hierarchy and shared result alias used
//! throughout the crate.

pub mod errors;
pub mod result;

pub use errors::LogveilError;
pub use result::Result;
