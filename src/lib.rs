// ipanon - Keyed client IP pseudonymization
// Copyright (c) 2026 ipanon Contributors
// Licensed under the MIT License

//! # ipanon - Keyed client IP pseudonymization
//!
//! ipanon replaces the client address a web server observes with a stable,
//! IPv4-shaped pseudonym, so logs and analytics can still correlate requests
//! from one source without ever holding the real address.
//!
//! ## Overview
//!
//! - [`anonymization`] - HMAC-SHA256 pseudonymization core and the host-facing resolver
//! - [`middleware`] - `tower` layer that rewrites the client address on each request
//! - [`config`] - TOML configuration with environment overrides
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//! - [`domain`] - Error and result types
//!
//! ## Quick Start
//!
//! ```rust
//! use ipanon::anonymization::{anonymize_ip, AnonymizationConfig, ClientIpResolver};
//!
//! // The core: None means "no transform possible, keep the original"
//! assert_eq!(anonymize_ip("test-secret", "203.0.113.7").as_deref(), Some("101.193.201.3"));
//! assert_eq!(anonymize_ip("", "203.0.113.7"), None);
//!
//! // The host-facing wrapper: bypass when disabled, fail open when unconfigured
//! let resolver = ClientIpResolver::fixed(AnonymizationConfig::default());
//! assert_eq!(resolver.resolve("203.0.113.7"), "203.0.113.7");
//! ```
//!
//! ## Request pipeline
//!
//! ```rust
//! use ipanon::anonymization::{AnonymizationConfig, ClientIpResolver};
//! use ipanon::middleware::AnonymizeIpLayer;
//! use tokio::sync::watch;
//!
//! let (settings_tx, settings_rx) = watch::channel(AnonymizationConfig::default());
//! let layer = AnonymizeIpLayer::new(ClientIpResolver::new(settings_rx));
//!
//! // An administrator enables anonymization at runtime
//! settings_tx
//!     .send(AnonymizationConfig::enabled_with_secret("rotate-me"))
//!     .unwrap();
//! # let _ = layer;
//! ```

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod middleware;
