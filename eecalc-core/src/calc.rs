//! Heat loss and cost calculations.

use tracing::{debug, warn};

use crate::error::ClientError;
use crate::models::{BuildingRecord, HeatPumpPackage};
use crate::traits::WeatherSource;

/// VAT multiplier applied to the package subtotal (5%).
pub const VAT_MULTIPLIER: f64 = 1.05;

/// Estimated heat loss of a building.
///
/// `floor_area × heating_factor × insulation_factor`.
pub fn heat_loss(building: &BuildingRecord) -> f64 {
    building.floor_area * building.heating_factor * building.insulation_factor
}

/// Heat loss normalised by the degree-days of the building's design region.
///
/// Client errors from the weather lookup are returned unchanged. Degree-days
/// must be positive and finite; anything else is reported as
/// [`ClientError::Generic`].
pub async fn power_heat_loss<W: WeatherSource>(
    building: &BuildingRecord,
    heat_loss: f64,
    weather: &W,
) -> Result<f64, ClientError> {
    let resolved = weather.resolve_weather(&building.design_region).await?;

    if !resolved.degree_days.is_finite() || resolved.degree_days <= 0.0 {
        warn!(
            region = %building.design_region,
            degree_days = resolved.degree_days,
            "Unusable degree-days in weather response"
        );
        return Err(ClientError::Generic);
    }

    let power = heat_loss / resolved.degree_days;
    debug!(
        region = %building.design_region,
        degree_days = resolved.degree_days,
        power_heat_loss = power,
        "Computed power heat loss"
    );
    Ok(power)
}

/// Total cost of a package including VAT.
///
/// VAT is applied once to the subtotal, not per line item.
pub fn total_cost(package: &HeatPumpPackage) -> f64 {
    package.subtotal() * VAT_MULTIPLIER
}

// ============================================================================
// Tests
// ============================================================================
