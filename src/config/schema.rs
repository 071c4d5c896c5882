//! Configuration schema types

use crate::anonymization::AnonymizationConfig;
use serde::{Deserialize, Serialize};

/// Main ipanon configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpAnonConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Client IP anonymization settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl IpAnonConfig {
    /// Validates the configuration
    ///
    /// An enabled feature without a secret is not an error: anonymization is a
    /// best-effort layer and fails open. See [`IpAnonConfig::warnings`].
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Non-fatal problems that leave the configuration usable but degraded
    pub fn warnings(&self) -> Vec<String> {
        self.anonymization.warnings()
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err(
                "logging.local_path cannot be empty when local_enabled is true".to_string(),
            );
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "/var/log/ipanon".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = IpAnonConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.anonymization.enabled);
        assert_eq!(config.application.log_level, "info");
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: IpAnonConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.anonymization.is_active());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = IpAnonConfig::default();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level"));
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = IpAnonConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_log_path_when_enabled() {
        let mut config = IpAnonConfig::default();
        config.logging.local_enabled = true;
        config.logging.local_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_enabled_without_secret_is_valid_but_warns() {
        let config: IpAnonConfig = toml::from_str(
            r#"
[anonymization]
enabled = true
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.warnings().len(), 1);
    }
}
