//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file with a freshly generated anonymization key.

use crate::anonymization::SECRET_KEY_ENV;
use clap::Args;
use rand::RngCore;
use std::fs;
use std::path::Path;

/// Length in bytes of generated anonymization keys
const GENERATED_KEY_BYTES: usize = 32;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "ipanon.toml")]
    pub output: String,

    /// Reference ${IPANON_ANONYMIZATION_SECRET_KEY} instead of embedding a generated key
    #[arg(long)]
    pub secret_from_env: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing ipanon configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let secret_line = if self.secret_from_env {
            format!("secret_key = \"${{{SECRET_KEY_ENV}}}\"")
        } else {
            format!("secret_key = \"{}\"", generate_secret_key())
        };

        match fs::write(&self.output, Self::generate_config(&secret_line)) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                if self.secret_from_env {
                    println!("  1. Export {SECRET_KEY_ENV} (e.g. in a .env file)");
                } else {
                    println!("  1. Keep {} private; it contains the key", self.output);
                }
                println!("  2. Set anonymization.enabled = true");
                println!("  3. Validate configuration: ipanon validate-config");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    fn generate_config(secret_line: &str) -> String {
        format!(
            r#"# ipanon Configuration File
# Keyed pseudonymization of client IP addresses

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[anonymization]
# When false, real client addresses flow through unchanged
enabled = false
# HMAC-SHA256 key. Changing it changes every pseudonym.
# An empty key disables anonymization even when enabled = true.
{secret_line}

[logging]
local_enabled = false
local_path = "/var/log/ipanon"
# daily, hourly or never
local_rotation = "daily"
"#
        )
    }
}

/// Random hex-encoded key suitable for `anonymization.secret_key`
pub fn generate_secret_key() -> String {
    let mut key = [0u8; GENERATED_KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut key);
    hex::encode(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IpAnonConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_key_shape() {
        let key = generate_secret_key();
        assert_eq!(key.len(), GENERATED_KEY_BYTES * 2);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key, generate_secret_key());
    }

    #[test]
    fn test_generated_config_parses() {
        let content = InitArgs::generate_config("secret_key = \"abc\"");
        let config: IpAnonConfig = toml::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.anonymization.enabled);
        assert!(config.anonymization.has_secret());
    }

    #[tokio::test]
    async fn test_env_placeholder_matches_override_variable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ipanon.toml");
        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            secret_from_env: true,
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("secret_key = \"${IPANON_ANONYMIZATION_SECRET_KEY}\""));
        assert_eq!(SECRET_KEY_ENV, "IPANON_ANONYMIZATION_SECRET_KEY");
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ipanon.toml");
        std::fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            secret_from_env: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ipanon.toml");

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            secret_from_env: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);

        let config = crate::config::load_config(&path).unwrap();
        assert!(config.anonymization.has_secret());
    }
}
