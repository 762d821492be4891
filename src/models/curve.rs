//! Curve sampling for plots and exports, and point lookup on the curve.

use crate::domain::{GumbelParameters, PlotScale};
use crate::error::GumbelError;
use crate::models::gumbel::evaluate;

/// Smallest return period sampled by default (T = 1 is outside the domain).
pub const DEFAULT_T_MIN: f64 = 1.01;
/// Largest return period sampled by default.
pub const DEFAULT_T_MAX: f64 = 10_000.0;
/// Default number of samples along the curve.
pub const DEFAULT_SAMPLES: usize = 400;

/// Sample `(T, V)` pairs along the fitted curve.
///
/// Return periods are spaced evenly in `T` (`Linear`) or in `log10(T)` (`Log`).
/// The endpoints are included exactly.
pub fn sample_curve(
    params: &GumbelParameters,
    t_min: f64,
    t_max: f64,
    n: usize,
    scale: PlotScale,
) -> Result<Vec<(f64, f64)>, GumbelError> {
    if !(t_min.is_finite() && t_min > 1.0) {
        return Err(GumbelError::InvalidReturnPeriod {
            value: t_min,
            reason: "curve must start above 1 year".to_string(),
        });
    }
    if !(t_max.is_finite() && t_max > t_min) {
        return Err(GumbelError::InvalidReturnPeriod {
            value: t_max,
            reason: format!("curve end must be finite and greater than the start ({t_min})"),
        });
    }
    let n = n.max(2);

    let mut out = Vec::with_capacity(n);
    for t in spaced(t_min, t_max, n, scale) {
        out.push((t, evaluate(params, t)?));
    }
    Ok(out)
}

/// Sample with the default range and sample count.
pub fn default_curve(params: &GumbelParameters, scale: PlotScale) -> Result<Vec<(f64, f64)>, GumbelError> {
    sample_curve(params, DEFAULT_T_MIN, DEFAULT_T_MAX, DEFAULT_SAMPLES, scale)
}

/// Speed on the curve at a picked return period (e.g. a click on the plot).
///
/// Returns `(wind_speed, return_period)`.
pub fn nearest_curve_point(params: &GumbelParameters, return_period: f64) -> Result<(f64, f64), GumbelError> {
    let v = evaluate(params, return_period)?;
    Ok((v, return_period))
}

fn spaced(t_min: f64, t_max: f64, n: usize, scale: PlotScale) -> Vec<f64> {
    let last = n - 1;
    (0..n)
        .map(|i| {
            if i == last {
                return t_max;
            }
            let u = i as f64 / last as f64;
            match scale {
                PlotScale::Linear => t_min + u * (t_max - t_min),
                PlotScale::Log => {
                    let (l0, l1) = (t_min.log10(), t_max.log10());
                    10f64.powf(l0 + u * (l1 - l0))
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: GumbelParameters = GumbelParameters { mu: 20.0, scale: 4.0 };

    #[test]
    fn log_spacing_is_geometric() {
        let curve = sample_curve(&PARAMS, 10.0, 1000.0, 3, PlotScale::Log).unwrap();
        let ts: Vec<f64> = curve.iter().map(|&(t, _)| t).collect();
        assert!((ts[0] - 10.0).abs() < 1e-9);
        assert!((ts[1] - 100.0).abs() < 1e-9);
        assert_eq!(ts[2], 1000.0);
    }

    #[test]
    fn linear_spacing_is_even() {
        let curve = sample_curve(&PARAMS, 2.0, 12.0, 6, PlotScale::Linear).unwrap();
        for (i, &(t, v)) in curve.iter().enumerate() {
            assert!((t - (2.0 + 2.0 * i as f64)).abs() < 1e-12);
            assert!((v - evaluate(&PARAMS, t).unwrap()).abs() < 1e-12);
        }
    }

    #[test]
    fn default_curve_has_expected_shape() {
        let curve = default_curve(&PARAMS, PlotScale::Log).unwrap();
        assert_eq!(curve.len(), DEFAULT_SAMPLES);
        assert!(curve.windows(2).all(|w| w[1].1 > w[0].1), "curve must increase");
    }

    #[test]
    fn sample_curve_rejects_bad_ranges() {
        assert!(sample_curve(&PARAMS, 1.0, 100.0, 10, PlotScale::Log).is_err());
        assert!(sample_curve(&PARAMS, 50.0, 10.0, 10, PlotScale::Linear).is_err());
    }

    #[test]
    fn nearest_curve_point_uses_evaluate() {
        let (v, t) = nearest_curve_point(&PARAMS, 50.0).unwrap();
        assert_eq!(t, 50.0);
        assert_eq!(v, evaluate(&PARAMS, 50.0).unwrap());
        assert!(nearest_curve_point(&PARAMS, 0.9).is_err());
    }
}
