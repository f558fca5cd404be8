use serde::{Deserialize, Serialize};

/// Marginal rates applied to one estimate, as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRates {
    pub federal: f64,
    pub state: f64,
    /// Property tax as a fraction of house price. Not part of [`total`](Self::total).
    pub property: f64,
}

impl TaxRates {
    /// Combined income tax rate used to value deductions.
    pub fn total(&self) -> f64 {
        self.federal + self.state
    }
}

/// Every intermediate amount of an estimate, annual unless the name says
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub down_payment: f64,
    pub closing_costs: f64,
    pub loan_amount: f64,
    pub monthly_mortgage_payment: f64,
    pub annual_mortgage_payment: f64,

    /// Foregone return on down payment plus closing costs.
    pub upfront_opportunity_cost: f64,

    /// Foregone return on one year of mortgage payments.
    pub mortgage_opportunity_cost: f64,
    pub total_opportunity_cost: f64,

    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,

    pub mortgage_interest_tax_savings: f64,
    pub property_tax_tax_savings: f64,
    pub home_appreciation_value: f64,

    pub total_annual_costs: f64,
    pub total_annual_benefits: f64,
}

/// Outcome of one estimate.
///
/// `warnings` lists the soft validation findings in a fixed order; the
/// numbers are computed regardless of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityResult {
    /// Annual cost of owning after benefits.
    pub total_net_cost: f64,

    /// Monthly housing cost: mortgage, property tax, insurance and
    /// maintenance. Opportunity cost is not included.
    pub monthly_payment: f64,

    /// `monthly_payment` over gross monthly income.
    pub front_end_ratio: f64,

    pub is_affordable: bool,

    /// Federal plus state marginal rate.
    pub total_tax_rate: f64,

    pub tax_rates: TaxRates,
    pub breakdown: CostBreakdown,
    pub warnings: Vec<String>,
}
