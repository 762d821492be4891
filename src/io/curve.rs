//! Write a sampled Gumbel curve to CSV.
//!
//! The curve is sampled over the same return-period range the plots use, with
//! the project's scale preference deciding linear vs log spacing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{GumbelParameters, PlotScale};
use crate::error::AppError;
use crate::models::default_curve;

/// Write `(T, V)` samples of the fitted curve.
pub fn write_curve_csv(path: &Path, params: &GumbelParameters, scale: PlotScale) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve CSV '{}': {e}", path.display())))?;
    let n = write_curve(file, params, scale)?;
    tracing::info!(path = %path.display(), samples = n, "exported curve");
    Ok(())
}

pub fn write_curve<W: Write>(out: W, params: &GumbelParameters, scale: PlotScale) -> Result<usize, AppError> {
    let curve = default_curve(params, scale)?;
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["return_period_years", "wind_speed_ms"])
        .map_err(|e| AppError::new(2, format!("Failed to write curve CSV header: {e}")))?;
    for (t, v) in &curve {
        writer
            .write_record([format!("{t:.6}"), format!("{v:.6}")])
            .map_err(|e| AppError::new(2, format!("Failed to write curve CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush curve CSV: {e}")))?;
    Ok(curve.len())
}
