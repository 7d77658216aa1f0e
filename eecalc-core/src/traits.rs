//! Trait definitions for `eecalc`.

use crate::error::ClientError;
use crate::models::LocationWeather;

/// A source of weather data keyed by design region.
///
/// Implemented by the remote weather client. The calculation engine only
/// depends on this trait, so tests can supply fixed weather.
pub trait WeatherSource: Send + Sync {
    /// Resolves weather for a design region.
    ///
    /// Fails with one of the [`ClientError`] kinds when the lookup cannot
    /// be completed.
    fn resolve_weather(
        &self,
        region: &str,
    ) -> impl std::future::Future<Output = Result<LocationWeather, ClientError>> + Send;
}
