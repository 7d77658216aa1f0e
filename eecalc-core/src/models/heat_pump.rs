//! Heat pump catalog types.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Cost Line Item
// ============================================================================

/// A single labelled cost within a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
    /// Description shown on the report.
    pub label: String,
    /// Amount in GBP, excluding VAT.
    pub cost: f64,
}

impl CostLineItem {
    /// Creates a new line item.
    pub fn new(label: impl Into<String>, cost: f64) -> Self {
        Self {
            label: label.into(),
            cost,
        }
    }
}

// ============================================================================
// Heat Pump Package
// ============================================================================

/// A heat pump package from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatPumpPackage {
    /// Package label (e.g. "8kW Package").
    pub label: String,
    /// Rated output capacity in kW.
    pub output_capacity: f64,
    /// Itemized costs, in display order.
    #[serde(default)]
    pub costs: Vec<CostLineItem>,
}

impl HeatPumpPackage {
    /// Sum of all line items, excluding VAT.
    pub fn subtotal(&self) -> f64 {
        self.costs.iter().map(|c| c.cost).sum()
    }

    /// Validates capacity and line item amounts.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.output_capacity.is_finite() || self.output_capacity <= 0.0 {
            return Err(CoreError::InvalidData(format!(
                "{}: output capacity must be positive, got {}",
                self.label, self.output_capacity
            )));
        }
        for item in &self.costs {
            if !item.cost.is_finite() || item.cost < 0.0 {
                return Err(CoreError::InvalidData(format!(
                    "{}: cost for '{}' must be non-negative, got {}",
                    self.label, item.label, item.cost
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal() {
        let package = HeatPumpPackage {
            label: "5kW Package".to_string(),
            output_capacity: 5.0,
            costs: vec![
                CostLineItem::new("Components", 3947.0),
                CostLineItem::new("Installation", 2900.0),
            ],
        };
        assert!((package.subtotal() - 6847.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_package_subtotal() {
        let package = HeatPumpPackage {
            label: "Empty".to_string(),
            output_capacity: 1.0,
            costs: vec![],
        };
        assert!(package.subtotal().abs() < f64::EPSILON);
        assert!(package.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_cost() {
        let package = HeatPumpPackage {
            label: "Bad".to_string(),
            output_capacity: 5.0,
            costs: vec![CostLineItem::new("Refund", -10.0)],
        };
        assert!(package.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let package = HeatPumpPackage {
            label: "Zero".to_string(),
            output_capacity: 0.0,
            costs: vec![],
        };
        assert!(package.validate().is_err());
    }
}
