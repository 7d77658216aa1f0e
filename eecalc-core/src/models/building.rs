//! Building submission types.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Building Record
// ============================================================================

/// A building submission.
///
/// Field names follow the submission dataset format (`submissionId`,
/// `designRegion`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingRecord {
    /// Unique submission identifier.
    pub submission_id: String,
    /// Design region, used as the weather lookup key.
    pub design_region: String,
    /// Floor area in m².
    pub floor_area: f64,
    /// Construction age band (e.g. "1967 - 1975"). Informational only.
    #[serde(rename = "age")]
    pub age_band: String,
    /// Empirical heating factor.
    pub heating_factor: f64,
    /// Empirical insulation factor.
    pub insulation_factor: f64,
}

impl BuildingRecord {
    /// Validates that the numeric factors are positive and finite.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.submission_id.trim().is_empty() {
            return Err(CoreError::InvalidData(
                "submission id is empty".to_string(),
            ));
        }

        let factors = [
            ("floor_area", self.floor_area),
            ("heating_factor", self.heating_factor),
            ("insulation_factor", self.insulation_factor),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::InvalidData(format!(
                    "{}: {name} must be a positive number, got {value}",
                    self.submission_id
                )));
            }
        }
        Ok(())
    }
}

/// Finds a building by submission id.
pub fn find_building<'a>(
    buildings: &'a [BuildingRecord],
    submission_id: &str,
) -> Option<&'a BuildingRecord> {
    buildings.iter().find(|b| b.submission_id == submission_id)
}

// ============================================================================
// Tests
// ============================================================================
