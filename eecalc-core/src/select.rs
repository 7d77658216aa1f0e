//! Heat pump package recommendation.

use crate::models::HeatPumpPackage;

/// Selects the package with the smallest output capacity that still covers
/// `power_heat_loss`.
///
/// Ties on capacity go to the package listed first in the catalog. Returns
/// `None` when no package is large enough.
pub fn select_package(
    catalog: &[HeatPumpPackage],
    power_heat_loss: f64,
) -> Option<&HeatPumpPackage> {
    catalog
        .iter()
        .filter(|p| p.output_capacity >= power_heat_loss)
        .min_by(|a, b| a.output_capacity.total_cmp(&b.output_capacity))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn package(label: &str, capacity: f64) -> HeatPumpPackage {
        HeatPumpPackage {
            label: label.to_string(),
            output_capacity: capacity,
            costs: vec![],
        }
    }

    fn catalog() -> Vec<HeatPumpPackage> {
        vec![
            package("8kW Package", 8.0),
            package("5kW Package", 5.0),
            package("16kW Package", 16.0),
            package("12kW Package", 12.0),
        ]
    }

    #[test]
    fn test_selects_smallest_sufficient_package() {
        let catalog = catalog();
        let selected = select_package(&catalog, 0.48).unwrap();
        assert_eq!(selected.label, "5kW Package");
    }

    #[test]
    fn test_skips_packages_below_requirement() {
        let catalog = catalog();
        assert_eq!(select_package(&catalog, 9.5).unwrap().label, "12kW Package");
    }

    #[test]
    fn test_exact_capacity_qualifies() {
        let catalog = catalog();
        assert_eq!(select_package(&catalog, 8.0).unwrap().label, "8kW Package");
    }

    #[test]
    fn test_none_when_nothing_is_large_enough() {
        let catalog = catalog();
        assert!(select_package(&catalog, 20.0).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(select_package(&[], 1.0).is_none());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            package("First 8kW", 8.0),
            package("16kW", 16.0),
            package("Second 8kW", 8.0),
        ];
        assert_eq!(select_package(&catalog, 6.0).unwrap().label, "First 8kW");
    }
}
