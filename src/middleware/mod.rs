//! Request pipeline integration
//!
//! The host records the client address on each request as a [`ClientIp`]
//! extension. [`AnonymizeIpLayer`] sits at the front of the service stack and
//! rewrites that extension through a [`ClientIpResolver`], so every downstream
//! consumer (access logs, rate limiting keys, geolocation) only ever observes
//! the pseudonymized value.
//!
//! ```text
//! Request → AnonymizeIpLayer → Logging → Rate Limiter → Handler
//!               ↓
//!     ClientIp("203.0.113.7") → ClientIp("101.193.201.3")
//! ```
//!
//! [`ClientIpResolver`]: crate::anonymization::ClientIpResolver

pub mod layer;

pub use layer::{AnonymizeIpLayer, AnonymizeIpService, ClientIp};
