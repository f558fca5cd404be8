use serde::{Deserialize, Serialize};

use crate::FilingStatus;

/// Homeowner's insurance, percent of house price per year.
pub const DEFAULT_INSURANCE_PERCENT: f64 = 0.5;

/// Down payment, percent of house price.
pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 20.0;

/// Closing costs, percent of house price.
pub const DEFAULT_CLOSING_COSTS_PERCENT: f64 = 3.0;

/// Annual return foregone on cash tied up in the house, in percent.
pub const DEFAULT_OPPORTUNITY_COST_RATE: f64 = 8.0;

/// Loan term in years.
pub const DEFAULT_MORTGAGE_YEARS: u32 = 30;

/// Annual upkeep, percent of house price.
pub const DEFAULT_MAINTENANCE_COST_RATE: f64 = 1.0;

/// Annual property tax, percent of house price.
pub const DEFAULT_PROPERTY_TAX_RATE: f64 = 1.0;

/// Parameters for a single buy-versus-rent estimate.
///
/// Every rate or percentage field is expressed in whole percent (`6.5` means
/// 6.5%) exactly as a user would type it. Conversion to fractions happens
/// inside the calculator. Values are never clamped; see
/// [`validate`](crate::calculations::validation::validate) for the soft checks.
///
/// When deserialized, missing optional fields take the `DEFAULT_*` constants
/// of this module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityInput {
    /// Purchase price of the house.
    pub house_price: f64,

    /// Gross annual household income.
    pub user_income: f64,

    /// Nominal annual mortgage rate, in percent.
    pub mortgage_rate: f64,

    /// Expected annual home price appreciation, in percent.
    pub home_appreciation: f64,

    pub filing_status: FilingStatus,

    #[serde(default = "default_insurance_percent")]
    pub insurance_percent: f64,

    #[serde(default = "default_down_payment_percent")]
    pub down_payment_percent: f64,

    #[serde(default = "default_closing_costs_percent")]
    pub closing_costs_percent: f64,

    /// Return the buyer could have earned on the cash instead, in percent.
    #[serde(default = "default_opportunity_cost_rate")]
    pub opportunity_cost_rate: f64,

    #[serde(default = "default_mortgage_years")]
    pub mortgage_years: u32,

    #[serde(default = "default_maintenance_cost_rate")]
    pub maintenance_cost_rate: f64,

    #[serde(default = "default_property_tax_rate")]
    pub property_tax_rate: f64,
}

impl AffordabilityInput {
    /// Builds an input from the five required values, filling every other
    /// field from its default constant.
    pub fn new(
        house_price: f64,
        user_income: f64,
        mortgage_rate: f64,
        home_appreciation: f64,
        filing_status: FilingStatus,
    ) -> Self {
        Self {
            house_price,
            user_income,
            mortgage_rate,
            home_appreciation,
            filing_status,
            insurance_percent: DEFAULT_INSURANCE_PERCENT,
            down_payment_percent: DEFAULT_DOWN_PAYMENT_PERCENT,
            closing_costs_percent: DEFAULT_CLOSING_COSTS_PERCENT,
            opportunity_cost_rate: DEFAULT_OPPORTUNITY_COST_RATE,
            mortgage_years: DEFAULT_MORTGAGE_YEARS,
            maintenance_cost_rate: DEFAULT_MAINTENANCE_COST_RATE,
            property_tax_rate: DEFAULT_PROPERTY_TAX_RATE,
        }
    }
}

fn default_insurance_percent() -> f64 {
    DEFAULT_INSURANCE_PERCENT
}

fn default_down_payment_percent() -> f64 {
    DEFAULT_DOWN_PAYMENT_PERCENT
}

fn default_closing_costs_percent() -> f64 {
    DEFAULT_CLOSING_COSTS_PERCENT
}

fn default_opportunity_cost_rate() -> f64 {
    DEFAULT_OPPORTUNITY_COST_RATE
}

fn default_mortgage_years() -> u32 {
    DEFAULT_MORTGAGE_YEARS
}

fn default_maintenance_cost_rate() -> f64 {
    DEFAULT_MAINTENANCE_COST_RATE
}

fn default_property_tax_rate() -> f64 {
    DEFAULT_PROPERTY_TAX_RATE
}
