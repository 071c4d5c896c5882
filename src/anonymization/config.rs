//! Anonymization configuration

use crate::config::{secret_string, SecretString};
use crate::domain::{IpAnonError, Result};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Environment variable holding the secret key, both as an override and as the
/// `${...}` placeholder in generated configuration files
pub const SECRET_KEY_ENV: &str = "IPANON_ANONYMIZATION_SECRET_KEY";

/// Runtime switches for client IP pseudonymization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Enable/disable anonymization. When disabled the real address flows through.
    #[serde(default)]
    pub enabled: bool,

    /// HMAC key. When blank every address flows through unchanged.
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_secret_key")]
    pub secret_key: SecretString,
}

fn default_secret_key() -> SecretString {
    secret_string(String::new())
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            secret_key: default_secret_key(),
        }
    }
}

impl AnonymizationConfig {
    /// Build an enabled configuration with the given secret
    pub fn enabled_with_secret(secret: impl Into<String>) -> Self {
        Self {
            enabled: true,
            secret_key: secret_string(secret.into()),
        }
    }

    /// True when a non-blank secret is configured
    pub fn has_secret(&self) -> bool {
        !self.secret_key.expose_secret().is_blank()
    }

    /// True when requests will actually be pseudonymized
    pub fn is_active(&self) -> bool {
        self.enabled && self.has_secret()
    }

    /// Non-fatal configuration problems operators should know about
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.enabled && !self.has_secret() {
            warnings.push(
                "anonymization.enabled is true but anonymization.secret_key is empty; \
                 client addresses will not be anonymized"
                    .to_string(),
            );
        }
        warnings
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("IPANON_ANONYMIZATION_ENABLED") {
            self.enabled = val.parse().map_err(|_| {
                IpAnonError::Configuration(format!(
                    "Invalid IPANON_ANONYMIZATION_ENABLED value: {val}"
                ))
            })?;
        }

        if let Ok(val) = std::env::var(SECRET_KEY_ENV) {
            self.secret_key = secret_string(val);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnonymizationConfig::default();
        assert!(!config.enabled);
        assert!(!config.has_secret());
        assert!(!config.is_active());
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_enabled_without_secret_warns() {
        let config = AnonymizationConfig::enabled_with_secret("  ");
        assert!(!config.is_active());
        assert_eq!(config.warnings().len(), 1);
    }

    #[test]
    fn test_enabled_with_secret_is_active() {
        let config = AnonymizationConfig::enabled_with_secret("k");
        assert!(config.is_active());
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let config = AnonymizationConfig::enabled_with_secret("hunter2-secret");
        assert!(!format!("{config:?}").contains("hunter2-secret"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: AnonymizationConfig = toml::from_str("").unwrap();
        assert!(!config.enabled);
        assert!(!config.has_secret());
    }
}
