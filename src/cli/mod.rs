//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Logveil using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Logveil - IPv4 log anonymizer
#[derive(Parser, Debug)]
#[command(name = "logveil")]
#[command(version, about, long_about = None)]
#[command(author = "Logveil Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "logveil.toml", env = "LOGVEIL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOGVEIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a log stream from a file or stdin
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
