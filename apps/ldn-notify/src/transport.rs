//! # Transport
//!
//! Fetching of linked-data resources. The session only depends on the
//! [`Transport`] trait; [`HttpTransport`] is the reqwest-backed default.

use crate::NotifyError;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use std::future::Future;
use std::time::Duration;

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("ldn-notify/", env!("CARGO_PKG_VERSION"));

/// Cache behaviour requested for a fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Intermediaries may answer from cache.
    #[default]
    Default,
    /// Revalidate end to end. Used for the inbox listing.
    Reload,
}

/// Source of resource bodies.
pub trait Transport {
    /// Fetch `url` asking for `accept`, returning the body as text.
    fn fetch(
        &self,
        url: &str,
        accept: &str,
        cache: CacheMode,
    ) -> impl Future<Output = Result<String, NotifyError>> + Send;
}

/// HTTP(S) transport over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with an optional per-request timeout.
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self, NotifyError> {
        let mut builder =
            reqwest::Client::builder().user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| NotifyError::Configuration(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, accept: &str, cache: CacheMode) -> Result<String, NotifyError> {
        let mut req = self.http.get(url).header(ACCEPT, accept);
        if cache == CacheMode::Reload {
            req = req
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache");
        }

        let resp = req
            .send()
            .await
            .map_err(|e| NotifyError::transport(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NotifyError::transport(url, format!("HTTP {status}")));
        }

        tracing::debug!(url, %status, "fetched");
        resp.text()
            .await
            .map_err(|e| NotifyError::transport(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_mode() {
        assert_eq!(CacheMode::default(), CacheMode::Default);
    }

    #[test]
    fn user_agent_names_the_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("ldn-notify/"));
    }

    #[test]
    fn client_builds_with_timeout() {
        let transport = HttpTransport::new(Some(Duration::from_secs(3)), Some("custom/1.0"));
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let transport = HttpTransport::new(Some(Duration::from_secs(2)), None).expect("client");
        // Port 9 on loopback (discard) is not expected to serve HTTP.
        let result = transport
            .fetch("http://127.0.0.1:9/inbox/", "text/turtle", CacheMode::Reload)
            .await;
        assert!(matches!(result, Err(NotifyError::Transport { .. })));
    }
}
