//! Integration tests for the estimate pipeline against catalog fixtures.

use approx::assert_relative_eq;
use eecalc_core::calc::{heat_loss, total_cost};
use eecalc_core::select::select_package;
use eecalc_core::{
    BuildingRecord, ClientError, CostLineItem, HeatPumpPackage, LocationWeather, WeatherSource,
    estimate, find_building,
};

struct FixedWeather {
    degree_days: f64,
}

impl WeatherSource for FixedWeather {
    async fn resolve_weather(&self, region: &str) -> Result<LocationWeather, ClientError> {
        Ok(LocationWeather {
            location: region.to_string(),
            degree_days: self.degree_days,
            ground_temp: 10.0,
            postcode: "SW1A 1AA".to_string(),
            lat: 51.5033,
            lng: -0.1276,
        })
    }
}

fn package(kw: u32, components: f64) -> HeatPumpPackage {
    HeatPumpPackage {
        label: format!("{kw}kW Package"),
        output_capacity: f64::from(kw),
        costs: vec![
            CostLineItem::new(
                format!("Design & Supply of your Air Source Heat Pump System Components ({kw}kW)"),
                components,
            ),
            CostLineItem::new(
                "Installation of your Air Source Heat Pump and Hot Water Cylinder",
                2900.0,
            ),
            CostLineItem::new("Supply & Installation of your Homely Smart Thermostat", 150.0),
            CostLineItem::new("Supply & Installation of a new Consumer Unit", 300.0),
            CostLineItem::new(
                "MCS System Commissioning & HIES Insurance-backed Warranty",
                1648.0,
            ),
        ],
    }
}

fn catalog() -> Vec<HeatPumpPackage> {
    vec![
        package(8, 4216.0),
        package(5, 3947.0),
        package(16, 5421.0),
        package(12, 5138.0),
    ]
}

fn houses() -> Vec<BuildingRecord> {
    vec![BuildingRecord {
        submission_id: "4cb3820a-7bf6-47f9-8afc-3adcac8752cd".to_string(),
        design_region: "Severn Valley (Filton)".to_string(),
        floor_area: 125.0,
        age_band: "1967 - 1975".to_string(),
        heating_factor: 101.0,
        insulation_factor: 1.3,
    }]
}

#[test]
fn test_fixture_heat_loss_and_cost() {
    let houses = houses();
    let house = find_building(&houses, "4cb3820a-7bf6-47f9-8afc-3adcac8752cd").unwrap();
    assert_relative_eq!(heat_loss(house), 16412.5, epsilon = 1e-9);

    let catalog = catalog();
    assert_relative_eq!(total_cost(&catalog[0]), 9674.7, epsilon = 1e-9);
}

#[test]
fn test_fixture_selection() {
    let catalog = catalog();
    assert_eq!(select_package(&catalog, 0.48).unwrap().label, "5kW Package");
    assert_eq!(select_package(&catalog, 12.0).unwrap().label, "12kW Package");
    assert!(select_package(&catalog, 20.0).is_none());
}

#[tokio::test]
async fn test_full_estimate_for_fixture_house() {
    let houses = houses();
    let catalog = catalog();
    let weather = FixedWeather {
        degree_days: 2483.0,
    };

    let result = estimate(&houses[0], &catalog, &weather).await.unwrap();

    // 16412.5 / 2483 ≈ 6.61 kW, so the 8kW package is the smallest that fits.
    assert_relative_eq!(result.power_heat_loss, 16412.5 / 2483.0, epsilon = 1e-12);
    assert_eq!(result.recommended.as_ref().unwrap().label, "8kW Package");
    assert_relative_eq!(result.total_cost.unwrap(), 9674.7, epsilon = 1e-9);
}
