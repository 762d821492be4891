//! Synthetic calibration pairs drawn from a known Gumbel distribution.
//!
//! Annual maxima are sampled with a seeded RNG, ranked from largest to
//! smallest, and given Weibull plotting-position return periods
//! `T = (n + 1) / rank`. The resulting `(V, T)` pairs look like what an
//! engineer would tabulate from a station record, and fitting them should
//! land close to the generating parameters.

use rand::SeedableRng;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand_distr::Gumbel;

use crate::domain::{DataPoint, GumbelParameters};
use crate::error::AppError;

/// Settings for synthetic data generation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub params: GumbelParameters,
    /// Number of annual maxima (years of record).
    pub years: usize,
    pub seed: u64,
}

/// Generate calibration pairs, ordered by increasing return period.
pub fn generate_sample(config: &SampleConfig) -> Result<Vec<DataPoint>, AppError> {
    if config.years < 2 {
        return Err(AppError::new(2, "Sample needs at least 2 years of record."));
    }
    if !config.params.is_valid() {
        return Err(AppError::new(
            2,
            format!(
                "Invalid generating parameters (mu={}, scale={}); scale must be > 0.",
                config.params.mu, config.params.scale
            ),
        ));
    }

    let dist = Gumbel::new(config.params.mu, config.params.scale)
        .map_err(|e| AppError::new(4, format!("Gumbel distribution error: {e:?}")))?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut maxima: Vec<f64> = (0..config.years).map(|_| dist.sample(&mut rng)).collect();
    // Largest first: rank 1 gets the longest return period.
    maxima.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let n = config.years as f64;
    let mut points: Vec<DataPoint> = maxima
        .into_iter()
        .filter(|v| *v > 0.0)
        .enumerate()
        .map(|(i, v)| DataPoint::new(v, (n + 1.0) / (i as f64 + 1.0)))
        .collect();
    points.reverse();

    if points.len() < 2 {
        return Err(AppError::new(
            4,
            "Fewer than 2 positive wind speeds were generated; raise mu or lower scale.",
        ));
    }
    Ok(points)
}
