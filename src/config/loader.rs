//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::IpAnonConfig;
use crate::domain::errors::IpAnonError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into IpAnonConfig
/// 4. Applies environment variable overrides (IPANON_* prefix)
/// 5. Validates the configuration
///
/// Configuration warnings (such as anonymization enabled without a secret) are
/// logged, not returned as errors.
///
/// # Errors
///
/// Returns [`IpAnonError::Configuration`] if the file cannot be read or parsed
/// or a referenced environment variable is missing, and
/// [`IpAnonError::Validation`] if the parsed values are invalid.
///
/// # Examples
///
/// ```no_run
/// use ipanon::config::load_config;
///
/// let config = load_config("ipanon.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<IpAnonConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IpAnonError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        IpAnonError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: IpAnonConfig = toml::from_str(&contents)
        .map_err(|e| IpAnonError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        IpAnonError::Validation(format!("Configuration validation failed: {}", e))
    })?;

    for warning in config.warnings() {
        tracing::warn!(path = %path.display(), "{warning}");
    }

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Every missing variable is reported at once.
/// Values are escaped for a TOML basic string, so placeholders belong inside
/// double quotes and the parsed value equals the environment value byte for byte.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| IpAnonError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line =
                        processed_line.replace(&placeholder, &escape_toml_basic(&value));
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(IpAnonError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Escape a value for use inside a double-quoted TOML string
fn escape_toml_basic(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c if c.is_control() && (c as u32) < 0x80 => {
                escaped.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Applies environment variable overrides using IPANON_* prefix
///
/// Environment variables follow the pattern: IPANON_<SECTION>_<KEY>
fn apply_env_overrides(config: &mut IpAnonConfig) -> Result<()> {
    if let Ok(val) = std::env::var("IPANON_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    config.anonymization.apply_env_overrides()?;

    if let Ok(val) = std::env::var("IPANON_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            IpAnonError::Configuration(format!("Invalid IPANON_LOGGING_LOCAL_ENABLED value: {val}"))
        })?;
    }
    if let Ok(val) = std::env::var("IPANON_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
