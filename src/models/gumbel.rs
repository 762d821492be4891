//! Gumbel (Type I extreme value) model: fit, evaluate, invert.
//!
//! The fitted relationship is linear in the reduced variate:
//!
//! ```text
//! V(T) = μ + s · y(T),    y(T) = -ln(-ln(1 - 1/T))
//! ```
//!
//! - `fit` regresses observed speeds on `y(T_i)` by ordinary least squares.
//! - `evaluate` maps a return period to a speed.
//! - `invert` maps a speed back to a return period through the same reduced
//!   variate helpers, so the two are exact inverses.
//!
//! All three are pure functions with typed errors.

use nalgebra::{DMatrix, DVector};

use crate::domain::{DataPoint, GumbelParameters};
use crate::error::GumbelError;
use crate::math::{exceedance_probability, mean_and_variance, reduced_variate, solve_least_squares};

/// Largest return period (years) `invert` will report.
///
/// Beyond this the annual exceedance probability is below 1e-9 and the answer
/// is dominated by extrapolation error; such speeds are rejected instead.
pub const MAX_RETURN_PERIOD: f64 = 1e9;

/// Relative variance of the reduced variates below which the design is singular.
const VARIANCE_EPS: f64 = 1e-12;

/// Fit Gumbel parameters to calibration pairs.
///
/// Does not mutate `points`. Errors:
/// - `InsufficientData` for fewer than 2 points
/// - `InvalidInput` for any point with `T <= 1`, `V <= 0` or non-finite values
/// - `FitDegenerate` when all reduced variates coincide or the slope is not
///   a finite positive number
pub fn fit(points: &[DataPoint]) -> Result<GumbelParameters, GumbelError> {
    if points.len() < 2 {
        return Err(GumbelError::InsufficientData { found: points.len() });
    }

    let mut ys = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        if let Some(reason) = p.validation_error() {
            return Err(invalid_input(index, p, reason));
        }
        let y = reduced_variate(p.return_period)
            .ok_or_else(|| invalid_input(index, p, "reduced variate is undefined"))?;
        ys.push(y);
    }
    let speeds: Vec<f64> = points.iter().map(|p| p.wind_speed).collect();

    let (y_mean, y_var) = mean_and_variance(&ys).ok_or(GumbelError::InsufficientData { found: 0 })?;
    if !(y_var > VARIANCE_EPS * (1.0 + y_mean * y_mean)) {
        return Err(GumbelError::FitDegenerate {
            reason: "return periods do not vary (need at least two distinct values)".to_string(),
        });
    }

    let rows: Vec<f64> = ys.iter().flat_map(|&y| [1.0, y]).collect();
    let x = DMatrix::from_row_slice(ys.len(), 2, &rows);
    let v = DVector::from_row_slice(&speeds);
    let beta = solve_least_squares(&x, &v).ok_or_else(|| GumbelError::FitDegenerate {
        reason: "least squares system is numerically singular".to_string(),
    })?;

    let params = GumbelParameters {
        mu: beta[0],
        scale: beta[1],
    };
    if !params.mu.is_finite() || !params.scale.is_finite() {
        return Err(GumbelError::FitDegenerate {
            reason: "fitted parameters are not finite".to_string(),
        });
    }
    if params.scale <= 0.0 {
        return Err(GumbelError::FitDegenerate {
            reason: format!(
                "fitted scale {:.6} is not positive (wind speed must grow with return period)",
                params.scale
            ),
        });
    }

    Ok(params)
}

/// Wind speed for a return period: `μ + s · y(T)`.
///
/// Valid for every `T > 1`; there is no range restriction beyond the domain,
/// so far extrapolation is the caller's responsibility.
pub fn evaluate(params: &GumbelParameters, return_period: f64) -> Result<f64, GumbelError> {
    if !return_period.is_finite() {
        return Err(GumbelError::InvalidReturnPeriod {
            value: return_period,
            reason: "return period must be a finite number".to_string(),
        });
    }
    if return_period <= 1.0 {
        return Err(GumbelError::InvalidReturnPeriod {
            value: return_period,
            reason: "return period must be greater than 1 year".to_string(),
        });
    }
    let y = reduced_variate(return_period).ok_or_else(|| GumbelError::InvalidReturnPeriod {
        value: return_period,
        reason: "reduced variate is undefined".to_string(),
    })?;

    let v = params.mu + params.scale * y;
    if !v.is_finite() {
        return Err(GumbelError::InvalidReturnPeriod {
            value: return_period,
            reason: "wind speed is not finite for this return period".to_string(),
        });
    }
    Ok(v)
}

/// Return period for a wind speed: `T = 1 / (1 - exp(-exp(-y)))`, `y = (V - μ) / s`.
///
/// Rejected with `InvalidWindSpeed` when `V <= 0` or non-finite, when the
/// exceedance probability underflows to 0, when `T` would exceed
/// [`MAX_RETURN_PERIOD`], or when `T` collapses to 1 (speeds many scale
/// widths below μ).
pub fn invert(params: &GumbelParameters, wind_speed: f64) -> Result<f64, GumbelError> {
    if !wind_speed.is_finite() {
        return Err(GumbelError::InvalidWindSpeed {
            value: wind_speed,
            reason: "wind speed must be a finite number".to_string(),
        });
    }
    if wind_speed <= 0.0 {
        return Err(GumbelError::InvalidWindSpeed {
            value: wind_speed,
            reason: "wind speed must be greater than 0 m/s".to_string(),
        });
    }
    if !params.is_valid() {
        return Err(GumbelError::InvalidWindSpeed {
            value: wind_speed,
            reason: "model scale is not a positive finite number".to_string(),
        });
    }

    let y = (wind_speed - params.mu) / params.scale;
    let p = exceedance_probability(y);
    if !(p > 0.0) {
        return Err(GumbelError::InvalidWindSpeed {
            value: wind_speed,
            reason: "exceedance probability underflows to 0 (return period unbounded)".to_string(),
        });
    }

    let t = 1.0 / p;
    if !t.is_finite() || t > MAX_RETURN_PERIOD {
        return Err(GumbelError::InvalidWindSpeed {
            value: wind_speed,
            reason: format!("return period exceeds the supported maximum of {MAX_RETURN_PERIOD:e} years"),
        });
    }
    if t <= 1.0 {
        return Err(GumbelError::InvalidWindSpeed {
            value: wind_speed,
            reason: "speed is far below the location parameter (return period collapses to 1 year)"
                .to_string(),
        });
    }
    Ok(t)
}

fn invalid_input(index: usize, p: &DataPoint, reason: &str) -> GumbelError {
    GumbelError::InvalidInput {
        index,
        wind_speed: p.wind_speed,
        return_period: p.return_period,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<DataPoint> {
        vec![
            DataPoint::new(30.0, 10.0),
            DataPoint::new(35.0, 50.0),
            DataPoint::new(40.0, 100.0),
        ]
    }

    #[test]
    fn fit_recovers_exact_line() {
        let truth = GumbelParameters { mu: 22.0, scale: 4.5 };
        let points: Vec<DataPoint> = [2.0, 5.0, 10.0, 25.0, 50.0, 100.0]
            .iter()
            .map(|&t| DataPoint::new(evaluate(&truth, t).unwrap(), t))
            .collect();

        let fitted = fit(&points).unwrap();
        assert!((fitted.mu - truth.mu).abs() < 1e-9, "mu={}", fitted.mu);
        assert!((fitted.scale - truth.scale).abs() < 1e-9, "scale={}", fitted.scale);
    }

    #[test]
    fn fit_sample_scenario_is_physical() {
        let params = fit(&sample_points()).unwrap();
        assert!(params.mu.is_finite());
        assert!(params.scale > 0.0);
    }

    #[test]
    fn fit_requires_two_points() {
        assert_eq!(fit(&[]), Err(GumbelError::InsufficientData { found: 0 }));
        assert_eq!(
            fit(&[DataPoint::new(30.0, 10.0)]),
            Err(GumbelError::InsufficientData { found: 1 })
        );
    }

    #[test]
    fn fit_rejects_invalid_points_with_index() {
        let points = vec![DataPoint::new(30.0, 10.0), DataPoint::new(35.0, 1.0)];
        match fit(&points) {
            Err(GumbelError::InvalidInput { index, return_period, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(return_period, 1.0);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let points = vec![DataPoint::new(-1.0, 10.0), DataPoint::new(35.0, 50.0)];
        assert!(matches!(fit(&points), Err(GumbelError::InvalidInput { index: 0, .. })));
    }

    #[test]
    fn fit_equal_return_periods_is_degenerate() {
        let points = vec![
            DataPoint::new(30.0, 50.0),
            DataPoint::new(32.0, 50.0),
            DataPoint::new(35.0, 50.0),
        ];
        assert!(matches!(fit(&points), Err(GumbelError::FitDegenerate { .. })));
    }

    #[test]
    fn fit_decreasing_speeds_is_degenerate() {
        let points = vec![DataPoint::new(40.0, 10.0), DataPoint::new(30.0, 100.0)];
        assert!(matches!(fit(&points), Err(GumbelError::FitDegenerate { .. })));
    }

    #[test]
    fn evaluate_rejects_period_at_or_below_one() {
        let params = fit(&sample_points()).unwrap();
        for &t in &[1.0, 0.5, 0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(evaluate(&params, t), Err(GumbelError::InvalidReturnPeriod { .. })),
                "T={t}"
            );
        }
    }

    #[test]
    fn invert_rejects_non_positive_speed() {
        let params = fit(&sample_points()).unwrap();
        for &v in &[0.0, -5.0, f64::NAN] {
            assert!(
                matches!(invert(&params, v), Err(GumbelError::InvalidWindSpeed { .. })),
                "V={v}"
            );
        }
    }

    #[test]
    fn invert_guards_extreme_speeds() {
        let params = GumbelParameters { mu: 25.0, scale: 3.0 };
        // 100 scale widths above μ: T would be ~e^100.
        assert!(matches!(invert(&params, 325.0), Err(GumbelError::InvalidWindSpeed { .. })));
        // 40 scale widths below μ still positive speed if μ large enough.
        let wide = GumbelParameters { mu: 500.0, scale: 3.0 };
        assert!(matches!(invert(&wide, 380.0), Err(GumbelError::InvalidWindSpeed { .. })));
    }

    #[test]
    fn evaluate_invert_round_trip() {
        let params = fit(&sample_points()).unwrap();
        for &t in &[1.05, 2.0, 10.0, 50.0, 100.0, 500.0, 10_000.0] {
            let v = evaluate(&params, t).unwrap();
            let back = invert(&params, v).unwrap();
            assert!(((back - t) / t).abs() < 1e-9, "T={t} back={back}");
        }
        for &v in &[25.0, 30.0, 40.0, 55.0] {
            let t = invert(&params, v).unwrap();
            let back = evaluate(&params, t).unwrap();
            assert!((back - v).abs() < 1e-9, "V={v} back={back}");
        }
    }

    #[test]
    fn evaluate_extrapolates_beyond_inputs() {
        let params = fit(&sample_points()).unwrap();
        let v100 = evaluate(&params, 100.0).unwrap();
        let v1000 = evaluate(&params, 1000.0).unwrap();
        assert!(v1000 > v100);
    }
}
