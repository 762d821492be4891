//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and querying
//! - written into project snapshots and CSV exports
//! - reloaded later for reporting or further queries

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One observed calibration pair: a wind speed and the return period it is
/// associated with.
///
/// Valid points satisfy `wind_speed > 0` and `return_period > 1`; the check
/// lives in the fitter so that a front-end can hold half-edited rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Wind speed (m/s).
    pub wind_speed: f64,
    /// Return period (years).
    pub return_period: f64,
}

impl DataPoint {
    pub fn new(wind_speed: f64, return_period: f64) -> Self {
        Self {
            wind_speed,
            return_period,
        }
    }

    /// Why this point cannot be fitted, if anything.
    pub fn validation_error(&self) -> Option<&'static str> {
        if !self.return_period.is_finite() || !self.wind_speed.is_finite() {
            Some("values must be finite")
        } else if self.return_period <= 1.0 {
            Some("return period must be greater than 1 year")
        } else if self.wind_speed <= 0.0 {
            Some("wind speed must be greater than 0 m/s")
        } else {
            None
        }
    }
}

/// Location and scale of a fitted Gumbel distribution.
///
/// The fitted relationship is `V = mu + scale * y(T)` where `y` is the reduced
/// variate. Only `models::gumbel::fit` produces values with `scale > 0`;
/// snapshot loading re-checks the same condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GumbelParameters {
    /// Location parameter μ (m/s).
    pub mu: f64,
    /// Scale parameter 1/α (m/s).
    pub scale: f64,
}

impl GumbelParameters {
    /// Dispersion parameter α = 1 / scale (s/m).
    pub fn alpha(&self) -> f64 {
        1.0 / self.scale
    }

    pub fn is_valid(&self) -> bool {
        self.mu.is_finite() && self.scale.is_finite() && self.scale > 0.0
    }
}

/// Which direction a query was answered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Return period in, wind speed out.
    FromPeriod,
    /// Wind speed in, return period out.
    FromSpeed,
}

impl QueryKind {
    pub fn display_name(self) -> &'static str {
        match self {
            QueryKind::FromPeriod => "T -> V",
            QueryKind::FromSpeed => "V -> T",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::FromPeriod => "from_period",
            QueryKind::FromSpeed => "from_speed",
        }
    }
}

/// One answered query, kept for plot overlays and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueriedPoint {
    pub kind: QueryKind,
    /// The value the user asked about (T for `FromPeriod`, V for `FromSpeed`).
    pub input_value: f64,
    /// The value derived through the model.
    pub derived_value: f64,
    pub return_period: f64,
    pub wind_speed: f64,
}

impl QueriedPoint {
    pub fn from_period(return_period: f64, wind_speed: f64) -> Self {
        Self {
            kind: QueryKind::FromPeriod,
            input_value: return_period,
            derived_value: wind_speed,
            return_period,
            wind_speed,
        }
    }

    pub fn from_speed(wind_speed: f64, return_period: f64) -> Self {
        Self {
            kind: QueryKind::FromSpeed,
            input_value: wind_speed,
            derived_value: return_period,
            return_period,
            wind_speed,
        }
    }

    /// `input_value`/`derived_value` agree with the `(T, V)` columns for `kind`.
    pub fn is_consistent(&self) -> bool {
        match self.kind {
            QueryKind::FromPeriod => {
                self.input_value == self.return_period && self.derived_value == self.wind_speed
            }
            QueryKind::FromSpeed => {
                self.input_value == self.wind_speed && self.derived_value == self.return_period
            }
        }
    }
}

/// Return-period axis scale for plots (and the sampling of the curve).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlotScale {
    #[default]
    Log,
    Linear,
}

impl PlotScale {
    pub fn toggled(self) -> Self {
        match self {
            PlotScale::Log => PlotScale::Linear,
            PlotScale::Linear => PlotScale::Log,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PlotScale::Log => "logarithmic",
            PlotScale::Linear => "linear",
        }
    }
}

/// Goodness-of-fit diagnostics for a fitted model against its input set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub n: usize,
    pub sse: f64,
    pub rmse: f64,
    /// Coefficient of determination of `V` against the fitted line.
    pub r_squared: f64,
}

/// A per-point fitted result (used by reports).
#[derive(Debug, Clone)]
pub struct PointResidual {
    pub point: DataPoint,
    pub reduced_variate: f64,
    pub fitted_speed: f64,
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_point_validation_reasons() {
        assert!(DataPoint::new(30.0, 10.0).validation_error().is_none());
        assert!(DataPoint::new(30.0, 1.0).validation_error().is_some());
        assert!(DataPoint::new(0.0, 10.0).validation_error().is_some());
        assert!(DataPoint::new(f64::NAN, 10.0).validation_error().is_some());
    }

    #[test]
    fn queried_point_constructors_are_consistent() {
        let a = QueriedPoint::from_period(100.0, 41.2);
        assert_eq!(a.kind, QueryKind::FromPeriod);
        assert!(a.is_consistent());

        let b = QueriedPoint::from_speed(40.0, 73.5);
        assert_eq!(b.input_value, 40.0);
        assert_eq!(b.derived_value, 73.5);
        assert!(b.is_consistent());

        let mut c = b;
        c.derived_value = 1.0;
        assert!(!c.is_consistent());
    }

    #[test]
    fn plot_scale_serializes_lowercase() {
        let s = serde_json::to_string(&PlotScale::Linear).unwrap();
        assert_eq!(s, "\"linear\"");
        assert_eq!(PlotScale::Log.toggled(), PlotScale::Linear);
    }
}
