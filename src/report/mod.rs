//! Reporting utilities: residuals, fit quality and the formatted report.

pub mod format;

pub use format::*;

use crate::domain::{DataPoint, FitQuality, GumbelParameters, PointResidual};
use crate::error::GumbelError;
use crate::math::reduced_variate;
use crate::models::evaluate;

/// Compute fitted values and residuals for each input point.
pub fn compute_residuals(points: &[DataPoint], params: &GumbelParameters) -> Result<Vec<PointResidual>, GumbelError> {
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        let fitted_speed = evaluate(params, p.return_period)?;
        let reduced = reduced_variate(p.return_period).ok_or_else(|| GumbelError::InvalidReturnPeriod {
            value: p.return_period,
            reason: "reduced variate is undefined".to_string(),
        })?;
        out.push(PointResidual {
            point: *p,
            reduced_variate: reduced,
            fitted_speed,
            residual: p.wind_speed - fitted_speed,
        });
    }
    Ok(out)
}

/// Summarize residuals into SSE / RMSE / R².
///
/// R² is `1 - SSE / SST`; with no spread in the observed speeds it is 1 for a
/// perfect fit and 0 otherwise.
pub fn fit_quality(residuals: &[PointResidual]) -> FitQuality {
    let n = residuals.len();
    if n == 0 {
        return FitQuality {
            n,
            sse: 0.0,
            rmse: 0.0,
            r_squared: 0.0,
        };
    }

    let sse: f64 = residuals.iter().map(|r| r.residual * r.residual).sum();
    let mean_v = residuals.iter().map(|r| r.point.wind_speed).sum::<f64>() / n as f64;
    let sst: f64 = residuals
        .iter()
        .map(|r| (r.point.wind_speed - mean_v) * (r.point.wind_speed - mean_v))
        .sum();

    let r_squared = if sst > 0.0 {
        1.0 - sse / sst
    } else if sse == 0.0 {
        1.0
    } else {
        0.0
    };

    FitQuality {
        n,
        sse,
        rmse: (sse / n as f64).sqrt(),
        r_squared,
    }
}
