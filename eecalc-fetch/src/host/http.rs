//! HTTP transport with tracing and connection reuse.
//!
//! The weather client talks to the network through the [`HttpTransport`]
//! trait. [`HttpClient`] is the reqwest-backed implementation; tests swap in
//! scripted transports.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderMap};
use tracing::{debug, instrument};
use url::Url;

use crate::error::HttpError;

/// User agent string for eecalc.
const USER_AGENT: &str = concat!("eecalc/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Settings
// ============================================================================

/// Transport settings for the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Timeout for a single request.
    pub timeout: Duration,
    /// Keep idle connections open for reuse.
    pub keep_alive: bool,
    /// Idle connections kept per host. One request is in flight at a time,
    /// so one connection is enough.
    pub max_idle_per_host: usize,
    /// How long an idle connection is kept.
    pub idle_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            keep_alive: true,
            max_idle_per_host: 1,
            idle_timeout: Duration::from_secs(90),
        }
    }
}

impl HttpSettings {
    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// A received HTTP response with its body read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues GET requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs a GET request with the given headers.
    ///
    /// Any status is returned as `Ok`; only transport failures are errors.
    async fn get(&self, url: &Url, headers: HeaderMap) -> Result<HttpResponse, HttpError>;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// reqwest-backed HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with custom transport settings.
    pub fn with_settings(settings: &HttpSettings) -> Result<Self, HttpError> {
        let builder = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT);

        let builder = if settings.keep_alive {
            builder
                .pool_max_idle_per_host(settings.max_idle_per_host)
                .pool_idle_timeout(settings.idle_timeout)
                .tcp_keepalive(settings.idle_timeout)
        } else {
            builder.pool_max_idle_per_host(0)
        };

        let inner = builder.build().map_err(HttpError::Request)?;
        Ok(Self { inner })
    }

    /// Performs a GET request with custom headers.
    #[instrument(skip(self, headers), fields(url = %url))]
    pub async fn get_with_headers(
        &self,
        url: &Url,
        headers: HeaderMap,
    ) -> Result<HttpResponse, HttpError> {
        debug!("GET request with headers");

        let response = self.inner.get(url.clone()).headers(headers).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = %status, bytes = body.len(), "Response received");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn get(&self, url: &Url, headers: HeaderMap) -> Result<HttpResponse, HttpError> {
        self.get_with_headers(url, headers).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = HttpSettings::default();
        assert!(settings.keep_alive);
        assert_eq!(settings.max_idle_per_host, 1);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_client_builds_with_and_without_keep_alive() {
        assert!(HttpClient::with_settings(&HttpSettings::default()).is_ok());

        let settings = HttpSettings {
            keep_alive: false,
            ..HttpSettings::default()
        };
        assert!(HttpClient::with_settings(&settings).is_ok());
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("eecalc/"));
    }
}
