//! Logging and observability
//!
//! Structured logging with configurable levels, console output and optional
//! rotating JSON log files. Client addresses and the anonymization key are never
//! logged by this crate.
//!
//! # Example
//!
//! ```no_run
//! use ipanon::logging::init_logging;
//! use ipanon::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, logging_settings, LoggingGuard};
