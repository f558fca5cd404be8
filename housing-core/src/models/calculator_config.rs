use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conventional "28% rule" ceiling for the front-end ratio.
pub const FRONT_END_RATIO_LIMIT: f64 = 0.28;

/// Loan principal on which mortgage interest stays deductible.
pub const MORTGAGE_PRINCIPAL_DEDUCTION_CAP: f64 = 750_000.0;

/// Ceiling on the deductible state and local property tax.
pub const PROPERTY_TAX_DEDUCTION_CAP: f64 = 10_000.0;

/// Errors reported by [`CalculatorConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum CalculatorConfigError {
    /// The front-end ratio limit must be in (0, 1].
    #[error("front-end ratio limit must be between 0 and 1, got {0}")]
    InvalidFrontEndRatioLimit(f64),

    /// The mortgage principal cap must be finite and non-negative.
    #[error("mortgage principal deduction cap must be non-negative, got {0}")]
    InvalidMortgagePrincipalCap(f64),

    /// The property tax cap must be finite and non-negative.
    #[error("property tax deduction cap must be non-negative, got {0}")]
    InvalidPropertyTaxCap(f64),

    /// The state rate must be in [0, 1].
    #[error("state tax rate must be between 0 and 1, got {0}")]
    InvalidStateTaxRate(f64),
}

/// Policy constants of the calculation.
///
/// The default matches current federal rules with no state income tax.
/// Every field may be omitted when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Highest front-end ratio still reported as affordable (inclusive).
    pub front_end_ratio_limit: f64,

    pub mortgage_principal_deduction_cap: f64,

    pub property_tax_deduction_cap: f64,

    /// Flat state income tax rate, as a fraction.
    pub state_tax_rate: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            front_end_ratio_limit: FRONT_END_RATIO_LIMIT,
            mortgage_principal_deduction_cap: MORTGAGE_PRINCIPAL_DEDUCTION_CAP,
            property_tax_deduction_cap: PROPERTY_TAX_DEDUCTION_CAP,
            state_tax_rate: 0.0,
        }
    }
}

impl CalculatorConfig {
    /// Checks that every policy constant is usable.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorConfigError`] if:
    /// - `front_end_ratio_limit` is not in (0, 1]
    /// - either deduction cap is negative or not finite
    /// - `state_tax_rate` is not in [0, 1]
    pub fn validate(&self) -> Result<(), CalculatorConfigError> {
        if !(self.front_end_ratio_limit > 0.0 && self.front_end_ratio_limit <= 1.0) {
            return Err(CalculatorConfigError::InvalidFrontEndRatioLimit(
                self.front_end_ratio_limit,
            ));
        }

        if !is_non_negative_amount(self.mortgage_principal_deduction_cap) {
            return Err(CalculatorConfigError::InvalidMortgagePrincipalCap(
                self.mortgage_principal_deduction_cap,
            ));
        }

        if !is_non_negative_amount(self.property_tax_deduction_cap) {
            return Err(CalculatorConfigError::InvalidPropertyTaxCap(
                self.property_tax_deduction_cap,
            ));
        }

        if !(0.0..=1.0).contains(&self.state_tax_rate) {
            return Err(CalculatorConfigError::InvalidStateTaxRate(
                self.state_tax_rate,
            ));
        }

        Ok(())
    }
}

fn is_non_negative_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
