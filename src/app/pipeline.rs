//! Shared "fit pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! gather points -> fit -> residuals/fit quality -> queries
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use std::path::Path;

use crate::domain::{DataPoint, FitQuality, GumbelParameters, PlotScale, PointResidual, QueriedPoint};
use crate::engine::Project;
use crate::error::{AppError, GumbelError};
use crate::io::load_points_csv;
use crate::report::{compute_residuals, fit_quality};

/// All computed outputs of a single fit.
#[derive(Debug, Clone)]
pub struct FitRun {
    pub project: Project,
    pub params: GumbelParameters,
    pub residuals: Vec<PointResidual>,
    pub quality: FitQuality,
}

/// Gather calibration pairs from an optional CSV file followed by inline points.
pub fn collect_points(file: Option<&Path>, inline: &[DataPoint]) -> Result<Vec<DataPoint>, AppError> {
    let mut points = Vec::new();
    if let Some(path) = file {
        let ingested = load_points_csv(path)?;
        tracing::info!(
            path = %path.display(),
            points = ingested.points.len(),
            rows = ingested.rows_read,
            blank = ingested.blank_rows,
            "loaded calibration points"
        );
        points.extend(ingested.points);
    }
    points.extend_from_slice(inline);
    Ok(points)
}

/// Fit a new project built from `points`.
pub fn run_fit(points: Vec<DataPoint>, scale: PlotScale) -> Result<FitRun, AppError> {
    let mut project = Project::from_points(points);
    project.set_plot_scale(scale);
    project.fit()?;
    summarize(project)
}

/// Compute residuals and fit quality for an already fitted project.
pub fn summarize(project: Project) -> Result<FitRun, AppError> {
    let params = *project.params().ok_or(GumbelError::NoModel)?;
    let residuals = compute_residuals(project.points(), &params)?;
    let quality = fit_quality(&residuals);
    Ok(FitRun {
        project,
        params,
        residuals,
        quality,
    })
}

/// Answer period queries then speed queries, in the order given.
///
/// Stops at the first failing query; queries answered before it stay recorded.
pub fn run_queries(project: &mut Project, periods: &[f64], speeds: &[f64]) -> Result<Vec<QueriedPoint>, AppError> {
    let mut answered = Vec::with_capacity(periods.len() + speeds.len());
    for &t in periods {
        answered.push(project.query_by_period(t)?);
    }
    for &v in speeds {
        answered.push(project.query_by_speed(v)?);
    }
    Ok(answered)
}
