//! Fixed-rate mortgage payment.

/// Level monthly payment that retires `principal` over `years` at the
/// nominal `annual_rate` (a fraction, compounded monthly).
///
/// A rate of exactly zero divides the principal evenly across the payments.
///
/// # Examples
///
/// ```
/// use housing_core::calculations::mortgage::amortized_monthly_payment;
///
/// assert_eq!(amortized_monthly_payment(360_000.0, 0.0, 30), 1_000.0);
///
/// let payment = amortized_monthly_payment(400_000.0, 0.065, 30);
/// assert!((payment - 2_528.27).abs() < 0.01);
/// ```
pub fn amortized_monthly_payment(
    principal: f64,
    annual_rate: f64,
    years: u32,
) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    let num_payments = f64::from(years) * 12.0;

    if monthly_rate == 0.0 {
        return principal / num_payments;
    }

    let growth = (1.0 + monthly_rate).powf(num_payments);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_approx(
        actual: f64,
        expected: f64,
        tol: f64,
    ) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn thirty_year_loan_at_six_and_a_half_percent() {
        let payment = amortized_monthly_payment(400_000.0, 0.065, 30);

        assert_approx(payment, 2_528.272_093_971_861, 1e-6);
    }

    #[test]
    fn fifteen_year_loan_costs_more_per_month() {
        let thirty = amortized_monthly_payment(400_000.0, 0.065, 30);
        let fifteen = amortized_monthly_payment(400_000.0, 0.065, 15);

        assert!(fifteen > thirty);
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let payment = amortized_monthly_payment(400_000.0, 0.0, 30);

        assert_eq!(payment * 360.0, 400_000.0);
    }

    #[test]
    fn zero_principal_costs_nothing() {
        assert_eq!(amortized_monthly_payment(0.0, 0.065, 30), 0.0);
    }

    #[test]
    fn zero_term_is_not_finite() {
        assert!(!amortized_monthly_payment(400_000.0, 0.065, 0).is_finite());
        assert!(!amortized_monthly_payment(400_000.0, 0.0, 0).is_finite());
    }

    #[test]
    fn nan_rate_propagates() {
        assert!(amortized_monthly_payment(400_000.0, f64::NAN, 30).is_nan());
    }
}
