//! Marginal tax rate lookup.

use crate::{FilingStatus, TaxRates};

/// Federal marginal rate for `income` under `status`.
///
/// Scans the bracket table in ascending order and returns the rate of the
/// first bracket whose upper bound is at or above `income`. Income above the
/// highest bound, and NaN income, fall into the top bracket.
pub fn federal_marginal_rate(
    income: f64,
    status: FilingStatus,
) -> f64 {
    let brackets = status.brackets();

    brackets
        .iter()
        .find(|b| b.covers(income))
        .or(brackets.last())
        .map_or(0.0, |b| b.rate)
}

/// Builds the rate set for one estimate.
///
/// `property_tax_rate` is already a fraction.
pub fn tax_rates(
    income: f64,
    status: FilingStatus,
    state_tax_rate: f64,
    property_tax_rate: f64,
) -> TaxRates {
    TaxRates {
        federal: federal_marginal_rate(income, status),
        state: state_tax_rate,
        property: property_tax_rate,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_lowest_bracket() {
        assert_eq!(federal_marginal_rate(5_000.0, FilingStatus::Single), 0.10);
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert_eq!(federal_marginal_rate(11_000.0, FilingStatus::Single), 0.10);
        assert_eq!(federal_marginal_rate(11_000.01, FilingStatus::Single), 0.12);
    }

    #[test]
    fn single_120k_is_in_24_percent_bracket() {
        assert_eq!(federal_marginal_rate(120_000.0, FilingStatus::Single), 0.24);
    }

    #[test]
    fn married_120k_is_in_22_percent_bracket() {
        assert_eq!(
            federal_marginal_rate(120_000.0, FilingStatus::MarriedFilingJointly),
            0.22
        );
    }

    #[test]
    fn income_above_top_threshold_uses_top_rate() {
        assert_eq!(federal_marginal_rate(5_000_000.0, FilingStatus::Single), 0.37);
        assert_eq!(
            federal_marginal_rate(693_751.0, FilingStatus::MarriedFilingJointly),
            0.37
        );
    }

    #[test]
    fn zero_and_negative_income_use_lowest_rate() {
        assert_eq!(federal_marginal_rate(0.0, FilingStatus::Single), 0.10);
        assert_eq!(federal_marginal_rate(-1_000.0, FilingStatus::Single), 0.10);
    }

    #[test]
    fn nan_income_uses_top_rate() {
        assert_eq!(federal_marginal_rate(f64::NAN, FilingStatus::Single), 0.37);
    }

    #[test]
    fn every_single_bracket_boundary() {
        let cases = [
            (44_725.0, 0.12),
            (95_375.0, 0.22),
            (182_050.0, 0.24),
            (231_250.0, 0.32),
            (578_125.0, 0.35),
            (578_126.0, 0.37),
        ];

        for (income, expected) in cases {
            assert_eq!(
                federal_marginal_rate(income, FilingStatus::Single),
                expected,
                "income {income}"
            );
        }
    }

    #[test]
    fn tax_rates_total_excludes_property_rate() {
        let rates = tax_rates(120_000.0, FilingStatus::Single, 0.05, 0.01);

        assert_eq!(rates.federal, 0.24);
        assert_eq!(rates.state, 0.05);
        assert_eq!(rates.property, 0.01);
        assert_eq!(rates.total(), 0.24 + 0.05);
    }
}
