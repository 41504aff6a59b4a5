//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Logveil configuration file.

use crate::anonymization::{AnonymizationEngine, MaskMode};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Building the engine also normalizes bits, surfacing any
        // clamping/rounding warnings the run command would emit.
        match AnonymizationEngine::new(&config.anonymization) {
            Ok(engine) => {
                let policy = engine.policy();
                println!("Configuration is valid");
                println!();
                println!("Configuration Summary:");
                let mode = match (policy.mode, policy.random_consistent) {
                    (MaskMode::Zero, _) => "zero",
                    (MaskMode::Random, false) => "random",
                    (MaskMode::Random, true) => "random-consistent",
                    (MaskMode::Simple, _) => "simple",
                };
                println!("  Mode: {mode}");
                println!("  Bits: {}", policy.bits);
                if policy.mode == MaskMode::Simple {
                    println!("  Replacement Char: {}", policy.replacement_char as char);
                }
                println!("  Log Level: {}", config.logging.level);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
