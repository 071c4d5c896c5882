//! Tower layer that pseudonymizes the client address of each request

use crate::anonymization::ClientIpResolver;
use http::Request;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Client address as reported to the rest of the request pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIp(pub String);

impl ClientIp {
    /// Borrow the address string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IpAddr> for ClientIp {
    fn from(addr: IpAddr) -> Self {
        ClientIp(addr.to_string())
    }
}

impl From<SocketAddr> for ClientIp {
    fn from(addr: SocketAddr) -> Self {
        ClientIp(addr.ip().to_string())
    }
}

/// Layer applying [`AnonymizeIpService`] to an inner service
#[derive(Debug, Clone)]
pub struct AnonymizeIpLayer {
    resolver: ClientIpResolver,
}

impl AnonymizeIpLayer {
    /// Create a new layer backed by `resolver`
    pub fn new(resolver: ClientIpResolver) -> Self {
        Self { resolver }
    }
}

impl<S> Layer<S> for AnonymizeIpLayer {
    type Service = AnonymizeIpService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AnonymizeIpService {
            inner,
            resolver: self.resolver.clone(),
        }
    }
}

/// Service rewriting the [`ClientIp`] extension before calling the inner service
#[derive(Debug, Clone)]
pub struct AnonymizeIpService<S> {
    inner: S,
    resolver: ClientIpResolver,
}

impl<S, B> Service<Request<B>> for AnonymizeIpService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        if let Some(client_ip) = req.extensions_mut().get_mut::<ClientIp>() {
            client_ip.0 = self.resolver.resolve(&client_ip.0);
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::AnonymizationConfig;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceExt};

    async fn echo_client_ip(req: Request<()>) -> Result<Option<String>, Infallible> {
        Ok(req.extensions().get::<ClientIp>().map(|ip| ip.0.clone()))
    }

    fn request_from(addr: &str) -> Request<()> {
        let mut req = Request::new(());
        req.extensions_mut().insert(ClientIp(addr.to_string()));
        req
    }

    #[tokio::test]
    async fn test_rewrites_client_ip() {
        let resolver =
            ClientIpResolver::fixed(AnonymizationConfig::enabled_with_secret("test-secret"));
        let svc = AnonymizeIpLayer::new(resolver).layer(service_fn(echo_client_ip));

        let seen = svc.oneshot(request_from("203.0.113.7")).await.unwrap();
        assert_eq!(seen.as_deref(), Some("101.193.201.3"));
    }

    #[tokio::test]
    async fn test_passes_through_when_disabled() {
        let resolver = ClientIpResolver::fixed(AnonymizationConfig::default());
        let svc = AnonymizeIpLayer::new(resolver).layer(service_fn(echo_client_ip));

        let seen = svc.oneshot(request_from("203.0.113.7")).await.unwrap();
        assert_eq!(seen.as_deref(), Some("203.0.113.7"));
    }

    #[tokio::test]
    async fn test_request_without_client_ip_is_untouched() {
        let resolver =
            ClientIpResolver::fixed(AnonymizationConfig::enabled_with_secret("test-secret"));
        let svc = AnonymizeIpLayer::new(resolver).layer(service_fn(echo_client_ip));

        let seen = svc.oneshot(Request::new(())).await.unwrap();
        assert_eq!(seen, None);
    }

    #[test]
    fn test_client_ip_from_socket_addr() {
        let addr: SocketAddr = "[2001:db8::1]:443".parse().unwrap();
        assert_eq!(ClientIp::from(addr).as_str(), "2001:db8::1");
    }
}
