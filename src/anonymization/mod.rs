//! Client IP anonymization
//!
//! This module provides the keyed pseudonymization core and the host-facing
//! resolver that decides, per request, whether the core runs at all.
//!
//! # Architecture
//!
//! - **Core** ([`hmac_ip`]): pure `(secret, address) -> pseudonym` transform
//! - **Configuration** ([`config`]): enabled flag and secret key
//! - **Resolution** ([`resolver`]): bypass, fail-open fallback and operator warnings
//!
//! # Usage
//!
//! ```rust
//! use ipanon::anonymization::{AnonymizationConfig, ClientIpResolver};
//!
//! let resolver = ClientIpResolver::fixed(AnonymizationConfig::enabled_with_secret("test-secret"));
//! assert_eq!(resolver.resolve("203.0.113.7"), "101.193.201.3");
//! ```

pub mod config;
pub mod hmac_ip;
pub mod resolver;

// Re-export main types
pub use config::{AnonymizationConfig, SECRET_KEY_ENV};
pub use hmac_ip::{anonymize_ip, anonymize_ip_addr};
pub use resolver::ClientIpResolver;
