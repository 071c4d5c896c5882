//! Host-facing client address resolution
//!
//! [`ClientIpResolver`] is what a request pipeline calls at the point where it
//! first reads the client address. It reads the current configuration on every
//! call, bypasses entirely when anonymization is disabled, and falls back to the
//! real address whenever the core reports that no transform is possible.

use super::config::AnonymizationConfig;
use super::hmac_ip::anonymize_ip;
use secrecy::ExposeSecret;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Resolves the client address downstream components are allowed to see
#[derive(Debug, Clone)]
pub struct ClientIpResolver {
    settings: watch::Receiver<AnonymizationConfig>,
    warned_missing_secret: Arc<AtomicBool>,
}

impl ClientIpResolver {
    /// Create a resolver that follows configuration updates published on `settings`
    pub fn new(settings: watch::Receiver<AnonymizationConfig>) -> Self {
        Self {
            settings,
            warned_missing_secret: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a resolver over a configuration that never changes
    pub fn fixed(config: AnonymizationConfig) -> Self {
        // A receiver keeps serving the last value after its sender is dropped.
        let (_tx, rx) = watch::channel(config);
        Self::new(rx)
    }

    /// True when the current configuration pseudonymizes addresses
    pub fn is_active(&self) -> bool {
        self.settings.borrow().is_active()
    }

    /// Return the address to report for a request whose real address is `raw_ip`.
    ///
    /// Never fails: a disabled feature, a blank secret or a blank address all
    /// yield `raw_ip` unchanged.
    pub fn resolve(&self, raw_ip: &str) -> String {
        let settings = self.settings.borrow();
        if !settings.enabled {
            return raw_ip.to_string();
        }

        if !settings.has_secret() {
            if !self.warned_missing_secret.swap(true, Ordering::Relaxed) {
                tracing::warn!(
                    "IP anonymization is enabled but no secret key is configured; \
                     client addresses are passed through unchanged"
                );
            }
            return raw_ip.to_string();
        }

        // Re-arm the warning for the next period without a secret.
        if self.warned_missing_secret.load(Ordering::Relaxed) {
            self.warned_missing_secret.store(false, Ordering::Relaxed);
        }

        match anonymize_ip(settings.secret_key.expose_secret().as_ref(), raw_ip) {
            Some(pseudonym) => pseudonym,
            None => {
                tracing::trace!("Client address unavailable for anonymization");
                raw_ip.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bypass_when_disabled() {
        let mut config = AnonymizationConfig::enabled_with_secret("test-secret");
        config.enabled = false;
        let resolver = ClientIpResolver::fixed(config);

        assert_eq!(resolver.resolve("203.0.113.7"), "203.0.113.7");
        assert!(!resolver.is_active());
    }

    #[test]
    fn test_bypass_when_disabled_and_secret_missing() {
        let resolver = ClientIpResolver::fixed(AnonymizationConfig::default());
        assert_eq!(resolver.resolve("2001:db8::1"), "2001:db8::1");
    }

    #[test]
    fn test_anonymizes_when_enabled() {
        let resolver =
            ClientIpResolver::fixed(AnonymizationConfig::enabled_with_secret("test-secret"));
        assert_eq!(resolver.resolve("203.0.113.7"), "101.193.201.3");
        assert!(resolver.is_active());
    }

    #[test]
    fn test_fail_open_on_missing_secret() {
        let resolver = ClientIpResolver::fixed(AnonymizationConfig::enabled_with_secret(""));
        assert_eq!(resolver.resolve("203.0.113.7"), "203.0.113.7");
        // Second call takes the already-warned path.
        assert_eq!(resolver.resolve("203.0.113.7"), "203.0.113.7");
    }

    #[test]
    fn test_fail_open_on_blank_address() {
        let resolver =
            ClientIpResolver::fixed(AnonymizationConfig::enabled_with_secret("test-secret"));
        assert_eq!(resolver.resolve(""), "");
        assert_eq!(resolver.resolve("  "), "  ");
    }

    #[test]
    fn test_follows_configuration_updates() {
        let (tx, rx) = watch::channel(AnonymizationConfig::default());
        let resolver = ClientIpResolver::new(rx);
        assert_eq!(resolver.resolve("203.0.113.7"), "203.0.113.7");

        tx.send(AnonymizationConfig::enabled_with_secret("test-secret"))
            .unwrap();
        assert_eq!(resolver.resolve("203.0.113.7"), "101.193.201.3");

        tx.send(AnonymizationConfig::enabled_with_secret("other-secret"))
            .unwrap();
        assert_eq!(resolver.resolve("203.0.113.7"), "139.138.232.55");
    }

    #[test]
    fn test_missing_secret_warning_rearms_after_secret_returns() {
        let (tx, rx) = watch::channel(AnonymizationConfig::enabled_with_secret(""));
        let resolver = ClientIpResolver::new(rx);
        let warned = || resolver.warned_missing_secret.load(Ordering::Relaxed);

        assert_eq!(resolver.resolve("203.0.113.7"), "203.0.113.7");
        assert!(warned());

        tx.send(AnonymizationConfig::enabled_with_secret("test-secret"))
            .unwrap();
        assert_eq!(resolver.resolve("203.0.113.7"), "101.193.201.3");
        assert!(!warned());

        tx.send(AnonymizationConfig::enabled_with_secret(""))
            .unwrap();
        assert_eq!(resolver.resolve("203.0.113.7"), "203.0.113.7");
        assert!(warned());
    }

    #[test]
    fn test_concurrent_resolution_is_consistent() {
        let resolver =
            ClientIpResolver::fixed(AnonymizationConfig::enabled_with_secret("test-secret"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = resolver.clone();
                std::thread::spawn(move || resolver.resolve("203.0.113.7"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "101.193.201.3");
        }
    }
}
