//! Configuration management for ipanon.
//!
//! TOML configuration with `${VAR_NAME}` substitution, `IPANON_*` environment
//! overrides, defaults for every setting, and validation on load.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [anonymization]
//! enabled = true
//! secret_key = "${IPANON_ANONYMIZATION_SECRET_KEY}"
//!
//! [logging]
//! local_enabled = false
//! local_path = "/var/log/ipanon"
//! local_rotation = "daily"
//! ```
//!
//! Both anonymization settings default to "off": `enabled = false` and an empty
//! `secret_key`. Either one leaves client addresses untouched.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, IpAnonConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
