//! Weather data for a design region.

use serde::{Deserialize, Serialize};

/// Weather and location data resolved for a design region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationWeather {
    /// Location name as reported by the service.
    pub location: String,
    /// Heating degree-days for the location.
    pub degree_days: f64,
    /// Ground temperature in °C.
    pub ground_temp: f64,
    /// Postcode of the reference location.
    pub postcode: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}
