// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # eecalc Fetch
//!
//! Weather service client and host APIs for eecalc.
//!
//! ## Host APIs
//!
//! The [`host`] module provides abstractions for system interactions:
//!
//! - [`host::keychain`] - Secure credential storage (system keychain)
//! - [`host::http`] - HTTP transport with tracing and connection reuse
//!
//! ## Weather Client
//!
//! - [`client::WeatherClient`] - Resolves weather for a design region
//! - [`retry::RetryStrategy`] - Transient status codes and backoff delays
//! - [`attempt::FetchOutcome`] - Result plus the history of attempts
//!
//! ## Example
//!
//! ```ignore
//! use eecalc_core::WeatherSource;
//! use eecalc_fetch::{WeatherClient, WeatherClientConfig};
//!
//! let config = WeatherClientConfig::default().with_api_key(Some(key));
//! let client = WeatherClient::new(config)?;
//! let weather = client.resolve_weather("Severn Valley (Filton)").await?;
//! ```

pub mod attempt;
pub mod client;
pub mod error;
pub mod host;
pub mod retry;

// Re-export key types at crate root

// Errors
pub use error::{FetchError, HttpError, KeychainError};

// Host APIs
pub use host::{
    http::{HttpClient, HttpResponse, HttpSettings, HttpTransport},
    keychain::{SecretStore, SystemKeychain},
};

// Client
pub use attempt::{FetchAttempt, FetchOutcome};
pub use client::{DEFAULT_API_URL, DEFAULT_API_VERSION, Endpoint, WeatherClient, WeatherClientConfig};
pub use retry::{RETRYABLE_STATUSES, RetryStrategy};
