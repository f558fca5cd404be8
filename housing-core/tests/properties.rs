//! Property tests for the ownership cost calculation.

use housing_core::calculations::mortgage::amortized_monthly_payment;
use housing_core::{AffordabilityInput, FilingStatus, compute_net_cost, federal_marginal_rate};
use proptest::prelude::{any, prop_assert, prop_assert_eq, prop_oneof, proptest, Just, Strategy};

fn filing_status() -> impl Strategy<Value = FilingStatus> {
    prop_oneof![
        Just(FilingStatus::Single),
        Just(FilingStatus::MarriedFilingJointly)
    ]
}

fn sample_input(
    house_price: f64,
    user_income: f64,
    mortgage_rate: f64,
    status: FilingStatus,
) -> AffordabilityInput {
    AffordabilityInput::new(house_price, user_income, mortgage_rate, 3.0, status)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_net_cost_is_costs_minus_benefits(
        price in 1_000u32..5_000_000,
        income in 1_000u32..2_000_000,
        rate_bp in 0u32..2_000,
        status in filing_status()
    ) {
        let input = sample_input(f64::from(price), f64::from(income), f64::from(rate_bp) / 100.0, status);

        let result = compute_net_cost(&input);
        let b = &result.breakdown;

        prop_assert_eq!(result.total_net_cost, b.total_annual_costs - b.total_annual_benefits);
    }

    #[test]
    fn prop_is_affordable_matches_ratio_threshold(
        price in 1_000u32..5_000_000,
        income in 0u32..2_000_000,
        rate_bp in 0u32..2_000,
        status in filing_status()
    ) {
        let input = sample_input(f64::from(price), f64::from(income), f64::from(rate_bp) / 100.0, status);

        let result = compute_net_cost(&input);

        prop_assert_eq!(result.is_affordable, result.front_end_ratio <= 0.28);
    }

    #[test]
    fn prop_payments_discount_back_to_principal(
        principal in 1_000u32..2_000_000,
        rate_bp in 1u32..2_000,
        years in 1u32..41
    ) {
        let principal = f64::from(principal);
        let annual_rate = f64::from(rate_bp) / 10_000.0;
        let payment = amortized_monthly_payment(principal, annual_rate, years);

        let monthly_rate = annual_rate / 12.0;
        let present_value: f64 = (1..=years * 12)
            .map(|k| payment / (1.0 + monthly_rate).powi(k as i32))
            .sum();

        prop_assert!(
            (present_value - principal).abs() <= principal * 1e-9,
            "present value {present_value} vs principal {principal}"
        );
    }

    #[test]
    fn prop_zero_rate_payments_sum_to_principal(
        principal in 0u32..2_000_000,
        years in 1u32..41
    ) {
        let principal = f64::from(principal);
        let payment = amortized_monthly_payment(principal, 0.0, years);

        prop_assert!((payment * f64::from(years * 12) - principal).abs() <= 1e-6);
    }

    #[test]
    fn prop_federal_rate_is_non_decreasing_in_income(
        low in 0u32..1_000_000,
        delta in 0u32..1_000_000,
        status in filing_status()
    ) {
        let low = f64::from(low);
        let high = low + f64::from(delta);

        prop_assert!(federal_marginal_rate(low, status) <= federal_marginal_rate(high, status));
    }

    #[test]
    fn prop_married_rate_never_exceeds_single_rate(income in 0u32..1_000_000) {
        let income = f64::from(income);

        prop_assert!(
            federal_marginal_rate(income, FilingStatus::MarriedFilingJointly)
                <= federal_marginal_rate(income, FilingStatus::Single)
        );
    }

    #[test]
    fn prop_deductions_are_monotone_and_capped(
        price in 1_000u32..5_000_000,
        delta in 0u32..1_000_000,
        rate_bp in 1u32..2_000
    ) {
        let rate = f64::from(rate_bp) / 100.0;
        // Fixed income keeps the marginal rate constant across both prices.
        let lower = compute_net_cost(&sample_input(f64::from(price), 150_000.0, rate, FilingStatus::Single));
        let upper = compute_net_cost(&sample_input(f64::from(price + delta), 150_000.0, rate, FilingStatus::Single));

        let tax_rate = lower.total_tax_rate;
        let max_property = 10_000.0 * tax_rate;
        let max_interest = 750_000.0 * (rate / 100.0) * tax_rate;

        prop_assert!(lower.breakdown.property_tax_tax_savings <= upper.breakdown.property_tax_tax_savings);
        prop_assert!(lower.breakdown.mortgage_interest_tax_savings <= upper.breakdown.mortgage_interest_tax_savings);
        prop_assert!(upper.breakdown.property_tax_tax_savings <= max_property);
        prop_assert!(upper.breakdown.mortgage_interest_tax_savings <= max_interest + 1e-9);
    }

    #[test]
    fn prop_extra_violations_extend_warnings(
        price in 1_000u32..5_000_000,
        income in 1_000u32..2_000_000,
        bad_rate in any::<bool>(),
        bad_down_payment in any::<bool>()
    ) {
        let base = sample_input(f64::from(price), f64::from(income), 6.5, FilingStatus::Single);
        let mut worse = base.clone();
        if bad_rate {
            worse.mortgage_rate = 25.0;
        }
        if bad_down_payment {
            worse.down_payment_percent = 1.0;
        }

        let before = compute_net_cost(&base).warnings;
        let after = compute_net_cost(&worse).warnings;

        let mut remaining = after.iter();
        for warning in &before {
            prop_assert!(remaining.any(|w| w == warning), "lost warning {warning}");
        }
        prop_assert_eq!(
            after.len(),
            before.len() + usize::from(bad_rate) + usize::from(bad_down_payment)
        );
    }
}
