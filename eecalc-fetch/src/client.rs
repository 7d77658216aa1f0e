//! Weather service client.
//!
//! Builds endpoint URLs, authenticates with the API key header, retries
//! transient failures with exponential backoff, and parses the response into
//! [`LocationWeather`].

use std::sync::Arc;
use std::time::Duration;

use eecalc_core::{ClientError, LocationWeather, WeatherSource};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::attempt::{FetchAttempt, FetchOutcome};
use crate::error::FetchError;
use crate::host::http::{HttpClient, HttpSettings, HttpTransport};
use crate::retry::RetryStrategy;

// ============================================================================
// Constants
// ============================================================================

/// Weather service base URL.
pub const DEFAULT_API_URL: &str = "https://063qqrtqth.execute-api.eu-west-2.amazonaws.com";

/// Weather service API version.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Weather service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Weather by location.
    Weather,
}

impl Endpoint {
    /// Path segment for this endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Weather => "weather",
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for [`WeatherClient`].
#[derive(Clone)]
pub struct WeatherClientConfig {
    /// Base URL of the weather service.
    pub base_url: String,
    /// API version segment (e.g. "v1").
    pub version: String,
    /// API key. Requests fail with `MissingCredentials` when absent.
    pub api_key: Option<String>,
    /// Transport settings.
    pub http: HttpSettings,
    /// Retry policy.
    pub retry: RetryStrategy,
}

impl WeatherClientConfig {
    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the retry policy.
    pub fn with_retry(mut self, retry: RetryStrategy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the transport settings.
    pub fn with_http(mut self, http: HttpSettings) -> Self {
        self.http = http;
        self
    }

    /// Returns true if a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for WeatherClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            api_key: None,
            http: HttpSettings::default(),
            retry: RetryStrategy::default(),
        }
    }
}

impl std::fmt::Debug for WeatherClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClientConfig")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("has_api_key", &self.has_api_key())
            .field("http", &self.http)
            .field("retry", &self.retry)
            .finish()
    }
}

// ============================================================================
// API Response Types
// ============================================================================

/// Response from the weather endpoint.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    location: WeatherPayload,
}

/// Weather payload. Numeric fields are usually sent as text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeatherPayload {
    location: String,
    degree_days: NumericField,
    ground_temp: NumericField,
    postcode: String,
    lat: NumericField,
    lng: NumericField,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumericField {
    Text(String),
    Number(f64),
}

impl NumericField {
    fn parse(&self, field: &str) -> Result<f64, FetchError> {
        let value = match self {
            Self::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                FetchError::InvalidResponse(format!("{field}: '{text}' is not a number"))
            })?,
            Self::Number(n) => *n,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FetchError::InvalidResponse(format!(
                "{field}: {value} is not a finite number"
            )))
        }
    }
}

impl TryFrom<WeatherPayload> for LocationWeather {
    type Error = FetchError;

    fn try_from(payload: WeatherPayload) -> Result<Self, Self::Error> {
        Ok(LocationWeather {
            degree_days: payload.degree_days.parse("degreeDays")?,
            ground_temp: payload.ground_temp.parse("groundTemp")?,
            lat: payload.lat.parse("lat")?,
            lng: payload.lng.parse("lng")?,
            location: payload.location,
            postcode: payload.postcode,
        })
    }
}

/// Parses a weather endpoint body.
fn parse_weather(body: &str) -> Result<LocationWeather, FetchError> {
    let response: WeatherResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Failed to parse weather response");
        FetchError::Json(e)
    })?;
    LocationWeather::try_from(response.location)
}

// ============================================================================
// Weather Client
// ============================================================================

/// Client for the weather service.
///
/// One client is created per run and passed to the calculations. Requests
/// are issued one at a time.
pub struct WeatherClient {
    config: WeatherClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl WeatherClient {
    /// Creates a client backed by a reqwest HTTP client.
    pub fn new(config: WeatherClientConfig) -> Result<Self, FetchError> {
        let http = HttpClient::with_settings(&config.http)?;
        Ok(Self::with_transport(config, Arc::new(http)))
    }

    /// Creates a client with a custom transport.
    pub fn with_transport(config: WeatherClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Builds `{base}/{version}/{endpoint}?{params}`.
    pub fn endpoint_url(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<Url, FetchError> {
        let mut base = Url::parse(&self.config.base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join(&format!("{}/{}", self.config.version, endpoint.path()))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Builds request headers.
    fn headers(api_key: &str) -> Result<HeaderMap, FetchError> {
        let mut value = HeaderValue::from_str(api_key).map_err(|_| FetchError::InvalidCredentials)?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Fetches weather for a location, returning the full attempt history.
    pub async fn fetch_weather(&self, location: &str) -> FetchOutcome<LocationWeather> {
        self.get(Endpoint::Weather, &[("location", location)])
            .await
            .map(|body| parse_weather(&body))
    }

    /// GET with retries.
    #[instrument(skip(self, params))]
    async fn get(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> FetchOutcome<String> {
        let started = Instant::now();
        let mut attempts = Vec::new();
        let result = self.get_with_retries(endpoint, params, &mut attempts).await;

        FetchOutcome {
            result,
            attempts,
            duration: started.elapsed(),
        }
    }

    async fn get_with_retries(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
        attempts: &mut Vec<FetchAttempt>,
    ) -> Result<String, FetchError> {
        // Checked before any network access.
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FetchError::MissingCredentials)?;

        let url = self.endpoint_url(endpoint, params)?;
        let headers = Self::headers(api_key)?;
        let retry = &self.config.retry;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let attempt_started = Instant::now();
            debug!(url = %url, attempt, "Making GET request");

            let error = match self.transport.get(&url, headers.clone()).await {
                Ok(response) if response.status.is_success() => {
                    attempts.push(FetchAttempt::success(
                        attempt,
                        response.status.as_u16(),
                        attempt_started.elapsed(),
                    ));
                    return Ok(response.body);
                }
                Ok(response) => FetchError::Status(response.status),
                Err(e) => FetchError::Http(e),
            };

            let backoff = (retry.has_attempts_left(attempt) && retry.should_retry(&error))
                .then(|| retry.delay_for_attempt(attempt));

            warn!(
                attempt,
                error = %error,
                backoff = ?backoff,
                "Weather request failed"
            );
            attempts.push(FetchAttempt::failure(
                attempt,
                &error,
                attempt_started.elapsed(),
                backoff,
            ));

            let Some(delay) = backoff else {
                return Err(error);
            };
            tokio::time::sleep(delay).await;
        }
    }
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WeatherSource for WeatherClient {
    async fn resolve_weather(&self, region: &str) -> Result<LocationWeather, ClientError> {
        let outcome = self.fetch_weather(region).await;
        let attempts = outcome.attempts_count();
        let waited: Duration = outcome.backoffs().iter().sum();
        let failures: Vec<String> = outcome.errors().into_iter().map(str::to_owned).collect();

        match outcome.result {
            Ok(weather) => {
                info!(
                    region = %region,
                    attempts,
                    waited = ?waited,
                    degree_days = weather.degree_days,
                    "Resolved weather"
                );
                Ok(weather)
            }
            Err(e) => {
                let kind = e.classify();
                error!(
                    region = %region,
                    attempts,
                    waited = ?waited,
                    failures = ?failures,
                    kind = ?kind,
                    "Weather lookup failed"
                );
                Err(kind)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
