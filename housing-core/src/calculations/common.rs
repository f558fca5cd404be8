//! Common utility functions for the cost calculations.
//!
//! Everything here is plain `f64` arithmetic that lets non-finite values
//! flow through unchanged, so degenerate inputs surface as NaN or infinity
//! in the result instead of being masked.

/// Converts a whole-percent figure (`6.5`) to a fraction (`0.065`).
///
/// # Examples
///
/// ```
/// use housing_core::calculations::common::percent_to_fraction;
///
/// assert_eq!(percent_to_fraction(20.0), 0.2);
/// assert_eq!(percent_to_fraction(0.0), 0.0);
/// ```
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Returns `value`, or `limit` if `value` exceeds it.
///
/// Unlike [`f64::min`], a NaN `value` is returned as NaN rather than being
/// replaced by the limit.
///
/// # Examples
///
/// ```
/// use housing_core::calculations::common::cap;
///
/// assert_eq!(cap(12_000.0, 10_000.0), 10_000.0);
/// assert_eq!(cap(8_000.0, 10_000.0), 8_000.0);
/// assert!(cap(f64::NAN, 10_000.0).is_nan());
/// ```
pub fn cap(
    value: f64,
    limit: f64,
) -> f64 {
    if value > limit { limit } else { value }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // percent_to_fraction tests
    // =========================================================================

    #[test]
    fn percent_to_fraction_divides_by_hundred() {
        assert_eq!(percent_to_fraction(8.0), 0.08);
    }

    #[test]
    fn percent_to_fraction_keeps_sign() {
        assert_eq!(percent_to_fraction(-10.0), -0.1);
    }

    #[test]
    fn percent_to_fraction_propagates_nan() {
        assert!(percent_to_fraction(f64::NAN).is_nan());
    }

    // =========================================================================
    // cap tests
    // =========================================================================

    #[test]
    fn cap_returns_limit_when_exceeded() {
        assert_eq!(cap(900_000.0, 750_000.0), 750_000.0);
    }

    #[test]
    fn cap_returns_value_at_limit() {
        assert_eq!(cap(750_000.0, 750_000.0), 750_000.0);
    }

    #[test]
    fn cap_passes_negative_values_through() {
        assert_eq!(cap(-500.0, 10_000.0), -500.0);
    }

    #[test]
    fn cap_limits_positive_infinity() {
        assert_eq!(cap(f64::INFINITY, 10_000.0), 10_000.0);
    }
}
