//! Plain text cost report.

use eecalc_core::{BuildingRecord, HeatPumpPackage};

/// Rule printed above and below the submission id.
pub const SEPARATOR: &str = "--------------------------------------";

const INDENT: &str = "  ";

/// Renders cost reports as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Creates a new report formatter.
    pub fn new() -> Self {
        Self
    }

    /// Renders the full report for a building with a recommended package.
    pub fn render_report(
        &self,
        building: &BuildingRecord,
        heat_loss: f64,
        power_heat_loss: f64,
        package: &HeatPumpPackage,
        total_cost: f64,
    ) -> String {
        let mut lines = self.header(building);

        lines.push(format!("{INDENT}Estimate Heat Loss: {heat_loss}"));
        lines.push(format!("{INDENT}Design Region: {}", building.design_region));
        lines.push(format!("{INDENT}Power Heat Loss: {power_heat_loss}"));
        lines.push(format!("{INDENT}Recommended Heat Pump: {}", package.label));
        for item in &package.costs {
            lines.push(format!(
                "{INDENT}{INDENT}{} {}",
                item.label,
                format_currency(item.cost)
            ));
        }
        lines.push(format!(
            "{INDENT}Total Cost, including VAT: {}",
            format_currency(total_cost)
        ));

        lines.join("\n")
    }

    /// Renders the partial report used when the design region is unknown.
    pub fn render_degraded_report(&self, building: &BuildingRecord, heat_loss: f64) -> String {
        let mut lines = self.header(building);

        lines.push(format!("{INDENT}Estimate Heat Loss: {heat_loss}"));
        lines.push(format!("{INDENT}Warning: Could not find design region"));

        lines.join("\n")
    }

    fn header(&self, building: &BuildingRecord) -> Vec<String> {
        vec![
            SEPARATOR.to_string(),
            building.submission_id.clone(),
            SEPARATOR.to_string(),
        ]
    }
}

/// Formats an amount as pounds sterling, e.g. `£1,648.00`.
pub fn format_currency(amount: f64) -> String {
    let pence = (amount.abs() * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pence = pence as u64;
    let pounds = group_thousands(pence / 100);
    let sign = if amount < 0.0 && pence > 0 { "-" } else { "" };

    format!("{sign}£{pounds}.{:02}", pence % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
