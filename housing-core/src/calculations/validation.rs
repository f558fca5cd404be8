//! Soft validation of estimate inputs.
//!
//! Nothing here rejects an input. Each check that trips adds a warning, and
//! the calculation runs on the raw values regardless. Checks read the
//! whole-percent fields before any conversion.

use std::fmt;

use crate::AffordabilityInput;

/// Highest mortgage rate, in percent, not flagged as unrealistic.
const MAX_REALISTIC_MORTGAGE_RATE: f64 = 20.0;

/// Appreciation outside this band, in percent, is flagged as extreme.
const MIN_REASONABLE_APPRECIATION: f64 = -10.0;
const MAX_REASONABLE_APPRECIATION: f64 = 20.0;

/// Down payment outside this band, in percent, is flagged as unusual.
const MIN_USUAL_DOWN_PAYMENT: f64 = 3.0;
const MAX_USUAL_DOWN_PAYMENT: f64 = 50.0;

/// Price-to-income multiple above which the house is flagged.
const MAX_PRICE_TO_INCOME: f64 = 10.0;

/// A single soft validation finding.
///
/// Variants are declared in the order [`validate`] reports them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputWarning {
    NonPositiveHousePrice,
    NonPositiveIncome,
    UnrealisticMortgageRate(f64),
    ExtremeAppreciation(f64),
    UnusualDownPayment(f64),
    PriceExceedsIncomeMultiple,
}

impl fmt::Display for InputWarning {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NonPositiveHousePrice => f.write_str("House price must be positive"),
            Self::NonPositiveIncome => f.write_str("User income must be positive"),
            Self::UnrealisticMortgageRate(rate) => {
                write!(f, "Mortgage rate seems unrealistic ({rate}%)")
            }
            Self::ExtremeAppreciation(rate) => {
                write!(f, "Home appreciation rate seems extreme ({rate}%)")
            }
            Self::UnusualDownPayment(percent) => {
                write!(f, "Down payment percentage seems unusual ({percent}%)")
            }
            Self::PriceExceedsIncomeMultiple => f.write_str(
                "House price is more than 10x annual income - may not be affordable",
            ),
        }
    }
}

/// Runs every check against `input` and returns the findings in a fixed
/// order. An empty vector means nothing looked off.
///
/// Comparisons involving NaN are false, so NaN fields produce no warning.
pub fn validate(input: &AffordabilityInput) -> Vec<InputWarning> {
    let mut warnings = Vec::new();

    if input.house_price <= 0.0 {
        warnings.push(InputWarning::NonPositiveHousePrice);
    }

    if input.user_income <= 0.0 {
        warnings.push(InputWarning::NonPositiveIncome);
    }

    if input.mortgage_rate < 0.0 || input.mortgage_rate > MAX_REALISTIC_MORTGAGE_RATE {
        warnings.push(InputWarning::UnrealisticMortgageRate(input.mortgage_rate));
    }

    if input.home_appreciation < MIN_REASONABLE_APPRECIATION
        || input.home_appreciation > MAX_REASONABLE_APPRECIATION
    {
        warnings.push(InputWarning::ExtremeAppreciation(input.home_appreciation));
    }

    if input.down_payment_percent < MIN_USUAL_DOWN_PAYMENT
        || input.down_payment_percent > MAX_USUAL_DOWN_PAYMENT
    {
        warnings.push(InputWarning::UnusualDownPayment(
            input.down_payment_percent,
        ));
    }

    if input.house_price > input.user_income * MAX_PRICE_TO_INCOME {
        warnings.push(InputWarning::PriceExceedsIncomeMultiple);
    }

    warnings
}
