//! Reference datasets: building submissions and the heat pump catalog.
//!
//! Both datasets ship inside the binary. Settings may point at replacement
//! files, which are read whole and validated record by record.

use eecalc_core::{BuildingRecord, HeatPumpPackage, find_building};
use std::path::Path;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::persistence::load_json;
use crate::settings::Settings;

const BUNDLED_BUILDINGS: &str = include_str!("../data/houses.json");
const BUNDLED_HEAT_PUMPS: &str = include_str!("../data/heat-pumps.json");

/// Building records and heat pump catalog used by a calculation.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// Building submissions.
    pub buildings: Vec<BuildingRecord>,
    /// Heat pump packages.
    pub heat_pumps: Vec<HeatPumpPackage>,
}

impl ReferenceData {
    /// Creates reference data from already-loaded records.
    pub fn new(buildings: Vec<BuildingRecord>, heat_pumps: Vec<HeatPumpPackage>) -> Self {
        Self {
            buildings,
            heat_pumps,
        }
    }

    /// Parses the datasets compiled into the binary.
    pub fn bundled() -> Result<Self, StoreError> {
        let data = Self::new(
            serde_json::from_str(BUNDLED_BUILDINGS)?,
            serde_json::from_str(BUNDLED_HEAT_PUMPS)?,
        );
        data.validate()?;
        Ok(data)
    }

    /// Loads datasets, honoring any override paths in settings.
    pub async fn load(settings: &Settings) -> Result<Self, StoreError> {
        let buildings = match &settings.buildings_path {
            Some(path) => load_override(path).await?,
            None => serde_json::from_str(BUNDLED_BUILDINGS)?,
        };
        let heat_pumps = match &settings.heat_pumps_path {
            Some(path) => load_override(path).await?,
            None => serde_json::from_str(BUNDLED_HEAT_PUMPS)?,
        };

        let data = Self::new(buildings, heat_pumps);
        data.validate()?;

        debug!(
            buildings = data.buildings.len(),
            heat_pumps = data.heat_pumps.len(),
            "Reference data loaded"
        );
        Ok(data)
    }

    /// Validates every record in both datasets.
    pub fn validate(&self) -> Result<(), StoreError> {
        for building in &self.buildings {
            building.validate()?;
        }
        for package in &self.heat_pumps {
            package.validate()?;
        }
        Ok(())
    }

    /// Looks up a building by submission id.
    pub fn building(&self, submission_id: &str) -> Option<&BuildingRecord> {
        find_building(&self.buildings, submission_id)
    }
}

async fn load_override<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    info!(path = %path.display(), "Using reference data override");
    load_json(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FIXTURE_ID: &str = "4cb3820a-7bf6-47f9-8afc-3adcac8752cd";

    #[test]
    fn test_bundled_data_parses() {
        let data = ReferenceData::bundled().unwrap();
        assert!(!data.buildings.is_empty());
        assert_eq!(data.heat_pumps.len(), 4);
    }

    #[test]
    fn test_bundled_lookup() {
        let data = ReferenceData::bundled().unwrap();
        let building = data.building(FIXTURE_ID).unwrap();

        assert_eq!(building.design_region, "Severn Valley (Filton)");
        assert!(data.building("no-such-submission").is_none());
    }

    #[tokio::test]
    async fn test_load_without_overrides_matches_bundled() {
        let data = ReferenceData::load(&Settings::default()).await.unwrap();
        let bundled = ReferenceData::bundled().unwrap();

        assert_eq!(data.buildings, bundled.buildings);
        assert_eq!(data.heat_pumps, bundled.heat_pumps);
    }

    #[tokio::test]
    async fn test_override_replaces_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pumps.json");
        tokio::fs::write(
            &path,
            r#"[{"label": "3kW Package", "outputCapacity": 3, "costs": [{"label": "Unit", "cost": 1200}]}]"#,
        )
        .await
        .unwrap();

        let settings = Settings {
            heat_pumps_path: Some(path),
            ..Settings::default()
        };
        let data = ReferenceData::load(&settings).await.unwrap();

        assert_eq!(data.heat_pumps.len(), 1);
        assert_eq!(data.heat_pumps[0].label, "3kW Package");
        assert!(data.building(FIXTURE_ID).is_some());
    }

    #[tokio::test]
    async fn test_missing_override_is_an_error() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            buildings_path: Some(dir.path().join("absent.json")),
            ..Settings::default()
        };

        let err = ReferenceData::load(&settings).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_override_record_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pumps.json");
        tokio::fs::write(
            &path,
            r#"[{"label": "Broken", "outputCapacity": -1, "costs": []}]"#,
        )
        .await
        .unwrap();

        let settings = Settings {
            heat_pumps_path: Some(path),
            ..Settings::default()
        };

        let err = ReferenceData::load(&settings).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
    }
}
