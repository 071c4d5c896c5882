//! Domain error types
//!
//! This module defines the error hierarchy for ipanon. The anonymization core
//! itself never fails; these errors cover the surrounding configuration,
//! logging and I/O plumbing.

use thiserror::Error;

/// Main ipanon error type
#[derive(Debug, Error)]
pub enum IpAnonError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for IpAnonError {
    fn from(err: std::io::Error) -> Self {
        IpAnonError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for IpAnonError {
    fn from(err: toml::de::Error) -> Self {
        IpAnonError::Configuration(format!("TOML parse error: {err}"))
    }
}
