//! The Gumbel reduced variate and its inverse.
//!
//! For a return period `T > 1` the annual non-exceedance probability is
//! `F = 1 - 1/T` and the reduced variate is:
//!
//! - `y(T) = -ln(-ln(1 - 1/T))`
//!
//! and conversely, for any real `y`:
//!
//! - `T(y) = 1 / (1 - exp(-exp(-y)))`
//!
//! Numerical notes:
//! - `ln(1 - 1/T)` is computed as `ln_1p(-1/T)`, so very long return periods
//!   (where `1 - 1/T` rounds to exactly 1) still give a finite `y`.
//! - `1 - exp(-exp(-y))` is computed as `-expm1(-exp(-y))`, which keeps full
//!   precision for large `y` instead of cancelling to 0.
//!
//! Both directions share these two formulas so that evaluate/invert are exact
//! inverses up to rounding.

/// Reduced variate `y(T)`. Returns `None` when `T` is not finite or `T <= 1`.
pub fn reduced_variate(return_period: f64) -> Option<f64> {
    if !return_period.is_finite() || return_period <= 1.0 {
        return None;
    }
    // ln(1 - 1/T), strictly negative for T > 1.
    let ln_non_exceedance = (-1.0 / return_period).ln_1p();
    let y = -(-ln_non_exceedance).ln();
    y.is_finite().then_some(y)
}

/// Annual exceedance probability `1 - exp(-exp(-y))` for a reduced variate.
///
/// The result lies in `[0, 1]`; it is exactly `0` once `exp(-y)` underflows
/// (very large `y`) and exactly `1` once `exp(-exp(-y))` underflows (very
/// negative `y`).
pub fn exceedance_probability(y: f64) -> f64 {
    -(-(-y).exp()).exp_m1()
}

/// Return period `T(y)`. Returns `None` when the result is not a finite value
/// strictly greater than 1.
pub fn return_period_from_variate(y: f64) -> Option<f64> {
    if !y.is_finite() {
        return None;
    }
    let p = exceedance_probability(y);
    if p <= 0.0 {
        return None;
    }
    let t = 1.0 / p;
    (t.is_finite() && t > 1.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_variate_known_values() {
        // T = 2: F = 0.5, y = -ln(ln 2)
        let y = reduced_variate(2.0).unwrap();
        assert!((y - (-(2.0_f64.ln()).ln())).abs() < 1e-12);

        // T = 100 -> y ≈ 4.6001
        let y = reduced_variate(100.0).unwrap();
        assert!((y - 4.600149226).abs() < 1e-8, "got {y}");
    }

    #[test]
    fn reduced_variate_rejects_out_of_domain() {
        assert!(reduced_variate(1.0).is_none());
        assert!(reduced_variate(0.5).is_none());
        assert!(reduced_variate(-10.0).is_none());
        assert!(reduced_variate(f64::NAN).is_none());
        assert!(reduced_variate(f64::INFINITY).is_none());
    }

    #[test]
    fn reduced_variate_stays_finite_for_huge_periods() {
        let y = reduced_variate(1e20).unwrap();
        assert!((y - 1e20_f64.ln()).abs() < 1e-6, "got {y}");
    }

    #[test]
    fn variate_round_trip() {
        for &t in &[1.01, 1.5, 2.0, 10.0, 50.0, 100.0, 1_000.0, 1e6] {
            let y = reduced_variate(t).unwrap();
            let back = return_period_from_variate(y).unwrap();
            assert!(((back - t) / t).abs() < 1e-10, "T={t} back={back}");
        }
    }

    #[test]
    fn inverse_guards_both_tails() {
        // Very negative y: exceedance probability rounds to 1, T would be exactly 1.
        assert!(return_period_from_variate(-50.0).is_none());
        // Very large y: exp(-y) underflows, probability is 0.
        assert!(return_period_from_variate(800.0).is_none());
        assert!(return_period_from_variate(f64::NAN).is_none());
    }
}
