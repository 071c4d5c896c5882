//! Domain types shared across ipanon.
//!
//! All fallible plumbing returns [`Result<T, IpAnonError>`]. The anonymization
//! core is infallible by contract and signals "transform unavailable" with
//! `None` instead.

pub mod errors;
pub mod result;

pub use errors::IpAnonError;
pub use result::Result;
