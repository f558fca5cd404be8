//! Rendering of estimate results.
//!
//! Currency is shown in whole dollars and fractions as one-decimal
//! percentages. Rounding goes through [`Decimal`] so that half-cent and
//! half-dollar values round away from zero rather than to even.

use housing_core::{AffordabilityInput, AffordabilityResult, CostBreakdown};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Placeholder for amounts that are NaN, infinite or too large to render.
const NOT_AVAILABLE: &str = "—";

const AFFORDABLE_LABEL: &str = "Affordable";
const ABOVE_THRESHOLD_LABEL: &str = "Above threshold";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One row of the breakdown table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub label: &'static str,
    pub amount: f64,
}

/// A computed scenario, as emitted in JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    /// 1-based position of the scenario in its batch.
    pub scenario: usize,
    pub input: AffordabilityInput,
    pub result: AffordabilityResult,
}

fn round_half_up(
    value: f64,
    dp: u32,
) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value).map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

/// Groups the digits of a non-negative integer string in threes.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount as whole dollars: `-$1,235` for `-1234.5`.
pub fn format_currency(value: f64) -> String {
    let Some(rounded) = round_half_up(value, 0) else {
        return NOT_AVAILABLE.to_string();
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = rounded.abs().trunc().to_string();

    format!("{sign}${}", group_thousands(&digits))
}

/// Formats a fraction as a one-decimal percentage: `35.7%` for `0.35699`.
pub fn format_percent(fraction: f64) -> String {
    match round_half_up(fraction * 100.0, 1) {
        Some(mut pct) => {
            pct.rescale(1);
            format!("{pct}%")
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn affordability_label(result: &AffordabilityResult) -> &'static str {
    if result.is_affordable {
        AFFORDABLE_LABEL
    } else {
        ABOVE_THRESHOLD_LABEL
    }
}

/// The nine displayed breakdown rows in presentation order: four costs, two
/// opportunity costs, then three benefits shown as negative amounts.
pub fn line_items(breakdown: &CostBreakdown) -> [LineItem; 9] {
    let item = |label, amount| LineItem { label, amount };

    [
        item("Mortgage payments", breakdown.annual_mortgage_payment),
        item("Property tax", breakdown.property_tax),
        item("Insurance", breakdown.insurance),
        item("Maintenance", breakdown.maintenance),
        item("Opportunity cost (upfront)", breakdown.upfront_opportunity_cost),
        item(
            "Opportunity cost (mortgage payments)",
            breakdown.mortgage_opportunity_cost,
        ),
        item("Home appreciation", -breakdown.home_appreciation_value.abs()),
        item(
            "Mortgage interest tax savings",
            -breakdown.mortgage_interest_tax_savings.abs(),
        ),
        item(
            "Property tax savings",
            -breakdown.property_tax_tax_savings.abs(),
        ),
    ]
}

/// Renders one result as a plain-text report.
pub fn render_text(
    title: &str,
    result: &AffordabilityResult,
) -> String {
    let row = |label: &str, value: String| format!("{label:<38}{value:>12}");

    let mut lines = vec![
        title.to_string(),
        "=".repeat(title.chars().count()),
        row("Annual net cost of owning", format_currency(result.total_net_cost)),
        row("Monthly housing payment", format_currency(result.monthly_payment)),
        format!(
            "{}  {}",
            row("Front-end ratio", format_percent(result.front_end_ratio)),
            affordability_label(result)
        ),
        row("Combined tax rate", format_percent(result.total_tax_rate)),
        String::new(),
        "Breakdown".to_string(),
    ];

    lines.extend(
        line_items(&result.breakdown)
            .iter()
            .map(|item| format!("  {:<36}{:>12}", item.label, format_currency(item.amount))),
    );

    if !result.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        lines.extend(result.warnings.iter().map(|warning| format!("  - {warning}")));
    }

    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Renders scenarios as a pretty-printed JSON array. Non-finite numbers
/// become `null`.
pub fn render_json(reports: &[ScenarioReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
