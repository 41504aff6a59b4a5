//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "logveil.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: logveil validate-config");
                println!("  3. Anonymize a stream: logveil run < input.log > output.log");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration
    fn generate_config() -> String {
        r#"# Logveil Configuration File
# IPv4 log anonymizer

[anonymization]
# Anonymization mode:
#   zero              - clear the low-order bits of each address
#   random            - replace the low-order bits with a fresh random value
#   random-consistent - like random, but each original address always maps
#                       to the same replacement for the life of the process
#   simple            - overwrite trailing octet digits with replacement_char
#                       (rewrite is accepted as an alias)
mode = "zero"

# Number of low-order address bits to mask (0-32).
# Simple mode rounds this up to the next octet boundary (8, 16, 24, 32).
bits = 16

# Replacement character for simple mode (single ASCII character)
replacement_char = "x"

[logging]
# Log level (trace, debug, info, warn, error)
level = "info"

# Emit JSON-formatted log lines
json = false
"#
        .to_string()
    }
}
