//! Keyed IP pseudonymization
//!
//! Maps a client address to an IPv4-shaped pseudonym using HMAC-SHA256 keyed
//! with an operator secret. The mapping is a keyed pseudorandom function: it is
//! stable for a fixed secret, but the enumerable address space cannot be
//! precomputed into a dictionary without the key.
//!
//! The pseudonym is the first four digest bytes rendered as a dotted quad, which
//! is the same as reading the first eight lowercase hex characters in pairs.
//! Truncation bounds the pseudonym space to 2^32 and keeps output IPv4-shaped.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::net::Ipv4Addr;

type HmacSha256 = Hmac<Sha256>;

/// Name of the digest underlying the HMAC
pub const DIGEST_ALGORITHM: &str = "SHA256";

/// Number of digest bytes that make up a pseudonym
pub const PSEUDONYM_BYTES: usize = 4;

/// Pseudonymize a raw client address.
///
/// Returns `None` ("transform unavailable") when either the secret or the
/// address is blank. Callers must then keep the original address. Non-blank
/// inputs are keyed and hashed verbatim, without trimming.
///
/// # Example
///
/// ```
/// use ipanon::anonymization::anonymize_ip;
///
/// assert_eq!(
///     anonymize_ip("test-secret", "203.0.113.7").as_deref(),
///     Some("101.193.201.3")
/// );
/// assert_eq!(anonymize_ip("", "203.0.113.7"), None);
/// ```
pub fn anonymize_ip(secret: &str, raw_ip: &str) -> Option<String> {
    anonymize_ip_addr(secret, raw_ip).map(|addr| addr.to_string())
}

/// Same as [`anonymize_ip`] but returns the typed pseudonym.
pub fn anonymize_ip_addr(secret: &str, raw_ip: &str) -> Option<Ipv4Addr> {
    if is_blank(raw_ip) || is_blank(secret) {
        return None;
    }

    let digest = keyed_digest(secret, raw_ip)?;
    let [a, b, c, d] = digest;
    Some(Ipv4Addr::new(a, b, c, d))
}

/// Leading pseudonym bytes of HMAC-SHA256(secret, raw_ip)
fn keyed_digest(secret: &str, raw_ip: &str) -> Option<[u8; PSEUDONYM_BYTES]> {
    // HMAC accepts keys of any length, so this only fails on an impossible key size.
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(raw_ip.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut prefix = [0u8; PSEUDONYM_BYTES];
    prefix.copy_from_slice(&digest[..PSEUDONYM_BYTES]);
    Some(prefix)
}

/// Empty or whitespace-only
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
