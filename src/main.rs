// ipanon - Keyed client IP pseudonymization
// Copyright (c) 2026 ipanon Contributors
// Licensed under the MIT License

use clap::Parser;
use ipanon::cli::{Cli, Commands};
use ipanon::config::load_config;
use ipanon::logging::{init_logging, logging_settings};
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the config file when it loads; `init` and
    // broken files fall back to console-only defaults and report their own errors.
    let file_config = load_config(&cli.config).ok();
    let (log_level, logging_config) =
        logging_settings(cli.log_level.as_deref(), file_config.as_ref());
    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "ipanon starting");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Anonymize(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
