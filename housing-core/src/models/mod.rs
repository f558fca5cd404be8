mod affordability_input;
mod affordability_result;
mod calculator_config;
mod filing_status;
mod tax_bracket;

pub use affordability_input::{
    AffordabilityInput, DEFAULT_CLOSING_COSTS_PERCENT, DEFAULT_DOWN_PAYMENT_PERCENT,
    DEFAULT_INSURANCE_PERCENT, DEFAULT_MAINTENANCE_COST_RATE, DEFAULT_MORTGAGE_YEARS,
    DEFAULT_OPPORTUNITY_COST_RATE, DEFAULT_PROPERTY_TAX_RATE,
};
pub use affordability_result::{AffordabilityResult, CostBreakdown, TaxRates};
pub use calculator_config::{
    CalculatorConfig, CalculatorConfigError, FRONT_END_RATIO_LIMIT,
    MORTGAGE_PRINCIPAL_DEDUCTION_CAP, PROPERTY_TAX_DEDUCTION_CAP,
};
pub use filing_status::FilingStatus;
pub use tax_bracket::TaxBracket;
