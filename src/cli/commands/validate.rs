//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the ipanon configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Validation already runs inside load_config.
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Anonymization Enabled: {}", config.anonymization.enabled);
        println!(
            "  Secret Key: {}",
            if config.anonymization.has_secret() {
                "set"
            } else {
                "not set"
            }
        );
        println!("  Anonymization Active: {}", config.anonymization.is_active());
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }

        let warnings = config.warnings();
        if !warnings.is_empty() {
            println!();
            for warning in &warnings {
                println!("⚠️  {warning}");
            }
        }
        println!();
        Ok(0)
    }
}
