//! End-to-end estimate for a single building submission.
//!
//! Runs heat loss, weather lookup, power heat loss, package selection, and
//! cost totalling in order. The only step that suspends is the weather lookup.

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::calc;
use crate::error::ClientError;
use crate::models::{BuildingRecord, HeatPumpPackage};
use crate::select::select_package;
use crate::traits::WeatherSource;

// ============================================================================
// Cost Estimate
// ============================================================================

/// Result of a completed estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct CostEstimate {
    /// Building heat loss.
    pub heat_loss: f64,
    /// Heat loss normalised by degree-days.
    pub power_heat_loss: f64,
    /// Smallest package covering the power heat loss, if any.
    pub recommended: Option<HeatPumpPackage>,
    /// Total cost of the recommended package including VAT.
    pub total_cost: Option<f64>,
}

/// An estimate that stopped at the weather lookup.
///
/// Carries the heat loss computed before the failure so the caller can
/// still render a partial report.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{source}")]
pub struct EstimateError {
    /// Heat loss computed before the lookup failed.
    pub heat_loss: f64,
    /// The weather client failure.
    #[source]
    pub source: ClientError,
}

// ============================================================================
// Estimate
// ============================================================================

/// Runs the full estimate for one building.
#[instrument(skip(catalog, weather), fields(submission = %building.submission_id))]
pub async fn estimate<W: WeatherSource>(
    building: &BuildingRecord,
    catalog: &[HeatPumpPackage],
    weather: &W,
) -> Result<CostEstimate, EstimateError> {
    let heat_loss = calc::heat_loss(building);
    debug!(heat_loss, "Computed heat loss");

    let power_heat_loss = calc::power_heat_loss(building, heat_loss, weather)
        .await
        .map_err(|source| EstimateError { heat_loss, source })?;

    let recommended = select_package(catalog, power_heat_loss).cloned();
    let total_cost = recommended.as_ref().map(calc::total_cost);

    match &recommended {
        Some(package) => info!(package = %package.label, "Recommended heat pump"),
        None => info!(power_heat_loss, "No heat pump package is large enough"),
    }

    Ok(CostEstimate {
        heat_loss,
        power_heat_loss,
        recommended,
        total_cost,
    })
}

// ============================================================================
// Tests
// ============================================================================
