//! User settings.
//!
//! Settings live in a JSON file under the config directory. Every field has
//! a default, so a missing file or a partial file both load cleanly.

use eecalc_fetch::{
    DEFAULT_API_URL, DEFAULT_API_VERSION, HttpSettings, RetryStrategy, WeatherClientConfig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::persistence::{default_settings_path, load_json_or_default, save_json};

// ============================================================================
// Settings Types
// ============================================================================

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the weather service.
    pub api_base_url: String,

    /// API version path segment.
    pub api_version: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum number of weather requests per lookup, including the first.
    pub max_attempts: u32,

    /// Delay before the first retry, in milliseconds. Doubles on each retry.
    pub base_delay_ms: u64,

    /// Building dataset to use instead of the bundled one.
    pub buildings_path: Option<PathBuf>,

    /// Heat pump catalog to use instead of the bundled one.
    pub heat_pumps_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout_secs: 30,
            max_attempts: 5,
            base_delay_ms: 100,
            buildings_path: None,
            heat_pumps_path: None,
        }
    }
}

impl Settings {
    /// Checks values that would make the weather client unusable.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.api_base_url.trim().is_empty() {
            return Err(StoreError::Config("api_base_url must not be empty".into()));
        }
        if self.api_version.trim().is_empty() {
            return Err(StoreError::Config("api_version must not be empty".into()));
        }
        if self.max_attempts == 0 {
            return Err(StoreError::Config("max_attempts must be at least 1".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(StoreError::Config(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Names accepted by [`Settings::set_field`].
    pub const FIELDS: [&'static str; 7] = [
        "api_base_url",
        "api_version",
        "request_timeout_secs",
        "max_attempts",
        "base_delay_ms",
        "buildings_path",
        "heat_pumps_path",
    ];

    /// Sets one field from its text form.
    ///
    /// Dataset paths are cleared by an empty value or `none`.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), StoreError> {
        let value = value.trim();
        match field {
            "api_base_url" => self.api_base_url = value.to_string(),
            "api_version" => self.api_version = value.to_string(),
            "request_timeout_secs" => self.request_timeout_secs = parse_number(field, value)?,
            "max_attempts" => self.max_attempts = parse_number(field, value)?,
            "base_delay_ms" => self.base_delay_ms = parse_number(field, value)?,
            "buildings_path" => self.buildings_path = parse_path(value),
            "heat_pumps_path" => self.heat_pumps_path = parse_path(value),
            _ => {
                return Err(StoreError::Config(format!(
                    "unknown setting '{field}' (expected one of: {})",
                    Self::FIELDS.join(", ")
                )));
            }
        }
        debug!(field, "Setting changed");
        Ok(())
    }

    /// Retry strategy described by these settings.
    pub fn retry_strategy(&self) -> RetryStrategy {
        RetryStrategy::new(self.max_attempts)
            .with_base_delay(Duration::from_millis(self.base_delay_ms))
    }

    /// HTTP settings described by these settings.
    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings::default().with_timeout(Duration::from_secs(self.request_timeout_secs))
    }

    /// Builds a weather client configuration using the given API key.
    pub fn weather_client_config(&self, api_key: Option<String>) -> WeatherClientConfig {
        WeatherClientConfig::default()
            .with_base_url(self.api_base_url.clone())
            .with_version(self.api_version.clone())
            .with_api_key(api_key)
            .with_http(self.http_settings())
            .with_retry(self.retry_strategy())
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, StoreError> {
    value
        .parse()
        .map_err(|_| StoreError::Config(format!("{field}: '{value}' is not a valid number")))
}

fn parse_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

// ============================================================================
// Settings Store
// ============================================================================

/// Settings bound to the file they were loaded from.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Loads settings from the default path.
    pub async fn load_default() -> Result<Self, StoreError> {
        Self::load(default_settings_path()).await
    }

    /// Loads settings from a specific path, falling back to defaults.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let settings: Settings = load_json_or_default(&path).await;
        settings.validate()?;

        debug!(path = %path.display(), "Settings loaded");
        Ok(Self { path, settings })
    }

    /// Current settings.
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies a change to the in-memory settings.
    pub fn update<R, F: FnOnce(&mut Settings) -> R>(&mut self, f: F) -> R {
        f(&mut self.settings)
    }

    /// Writes settings to disk.
    pub async fn save(&self) -> Result<(), StoreError> {
        self.settings.validate()?;
        save_json(&self.path, &self.settings).await?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}
