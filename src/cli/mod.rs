//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for ipanon using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// ipanon - keyed client IP pseudonymization
#[derive(Parser, Debug)]
#[command(name = "ipanon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ipanon.toml", env = "IPANON_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "IPANON_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pseudonymize addresses from arguments or stdin
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
