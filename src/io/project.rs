//! Project files: a JSON snapshot of one document.
//!
//! The snapshot holds the input points, the fitted parameters (or `null`), the
//! answered queries and the plot scale. Loading restores it as-is; the fit is
//! only re-run when asked. Anything that could not have been produced by this
//! tool (out-of-domain points, non-positive scale, queries that do not match
//! the saved parameters) is rejected with `GumbelError::LoadError`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{DataPoint, GumbelParameters, PlotScale, QueriedPoint, QueryKind};
use crate::engine::{Project, QueryEngine};
use crate::error::{AppError, GumbelError};
use crate::models::{evaluate, invert};

/// Default file extension for project files.
pub const PROJECT_EXTENSION: &str = "gblproj";

/// Relative tolerance when re-deriving saved queries.
const QUERY_REL_TOL: f64 = 1e-6;

/// On-disk snapshot schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default = "default_tool")]
    pub tool: String,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub plot_scale: PlotScale,
    #[serde(default)]
    pub input_points: Vec<DataPoint>,
    #[serde(default)]
    pub parameters: Option<GumbelParameters>,
    #[serde(default)]
    pub queried_points: Vec<QueriedPoint>,
}

fn default_tool() -> String {
    "gw".to_string()
}

impl ProjectSnapshot {
    pub fn capture(project: &Project) -> Self {
        Self {
            tool: default_tool(),
            saved_at: Some(Utc::now()),
            plot_scale: project.plot_scale(),
            input_points: project.points().to_vec(),
            parameters: project.params().copied(),
            queried_points: project.queried_points().to_vec(),
        }
    }

    /// Validate and turn the snapshot back into a project.
    pub fn restore(self) -> Result<Project, GumbelError> {
        self.validate()?;
        let engine = QueryEngine::restore(self.parameters, self.queried_points);
        Ok(Project::from_parts(self.input_points, engine, self.plot_scale))
    }

    pub fn validate(&self) -> Result<(), GumbelError> {
        for (i, p) in self.input_points.iter().enumerate() {
            if let Some(reason) = p.validation_error() {
                return Err(GumbelError::load(format!(
                    "input point #{} (T={}, V={}): {reason}",
                    i + 1,
                    p.return_period,
                    p.wind_speed
                )));
            }
        }

        let Some(params) = &self.parameters else {
            if !self.queried_points.is_empty() {
                return Err(GumbelError::load(format!(
                    "{} queried point(s) saved without fitted parameters",
                    self.queried_points.len()
                )));
            }
            return Ok(());
        };

        if !params.is_valid() {
            return Err(GumbelError::load(format!(
                "parameters mu={}, scale={} are not a valid fit (scale must be finite and > 0)",
                params.mu, params.scale
            )));
        }

        for (i, q) in self.queried_points.iter().enumerate() {
            validate_query(i, q, params)?;
        }
        Ok(())
    }
}

fn validate_query(i: usize, q: &QueriedPoint, params: &GumbelParameters) -> Result<(), GumbelError> {
    let n = i + 1;
    let all_finite = [q.input_value, q.derived_value, q.return_period, q.wind_speed]
        .iter()
        .all(|v| v.is_finite());
    if !all_finite {
        return Err(GumbelError::load(format!("queried point #{n} has non-finite values")));
    }
    if q.return_period <= 1.0 {
        return Err(GumbelError::load(format!(
            "queried point #{n} is out of range (T={} must be > 1)",
            q.return_period
        )));
    }
    if !q.is_consistent() {
        return Err(GumbelError::load(format!(
            "queried point #{n} ({}) has input/derived values that do not match its T/V",
            q.kind.as_str()
        )));
    }

    // Re-derive each query in the direction it was asked. Near T = 1 a speed
    // pins T down far more tightly than T pins down the speed, so a speed query
    // is checked on T; a period query may legitimately yield V <= 0.
    let (expected, saved, what) = match q.kind {
        QueryKind::FromPeriod => {
            let v = evaluate(params, q.return_period)
                .map_err(|e| GumbelError::load(format!("queried point #{n}: {e}")))?;
            (v, q.wind_speed, "speed")
        }
        QueryKind::FromSpeed => {
            let t = invert(params, q.wind_speed)
                .map_err(|e| GumbelError::load(format!("queried point #{n}: {e}")))?;
            (t, q.return_period, "return period")
        }
    };
    let tol = QUERY_REL_TOL * expected.abs().max(1.0);
    if (expected - saved).abs() > tol {
        return Err(GumbelError::load(format!(
            "queried point #{n} does not match the saved parameters (stale {what})"
        )));
    }
    Ok(())
}

/// Write a project file (pretty JSON).
pub fn save_project(path: &Path, project: &Project) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create project file '{}': {e}", path.display())))?;
    let snapshot = ProjectSnapshot::capture(project);
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &snapshot)
        .map_err(|e| AppError::new(2, format!("Failed to write project file: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush project file: {e}")))?;
    info!(
        path = %path.display(),
        points = snapshot.input_points.len(),
        queries = snapshot.queried_points.len(),
        "saved project"
    );
    Ok(())
}

/// Parse and validate a project from JSON text.
pub fn project_from_json(json: &str) -> Result<Project, GumbelError> {
    let snapshot: ProjectSnapshot =
        serde_json::from_str(json).map_err(|e| GumbelError::load(format!("invalid project JSON: {e}")))?;
    snapshot.restore()
}

/// Read a project file.
///
/// With `refit`, the fit is re-run on the loaded points (which drops the saved
/// queries); otherwise the saved parameters are used verbatim.
pub fn load_project(path: &Path, refit: bool) -> Result<Project, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open project file '{}': {e}", path.display())))?;
    let snapshot: ProjectSnapshot = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| GumbelError::load(format!("invalid project JSON in '{}': {e}", path.display())))?;
    let mut project = snapshot.restore()?;
    info!(
        path = %path.display(),
        points = project.points().len(),
        fitted = project.params().is_some(),
        queries = project.queried_points().len(),
        "loaded project"
    );

    if refit {
        project.fit()?;
    }
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted_project() -> Project {
        let mut p = Project::from_points(vec![
            DataPoint::new(30.0, 10.0),
            DataPoint::new(35.0, 50.0),
            DataPoint::new(40.0, 100.0),
        ]);
        p.fit().unwrap();
        p.query_by_period(200.0).unwrap();
        p.query_by_speed(38.0).unwrap();
        p.set_plot_scale(PlotScale::Linear);
        p
    }

    #[test]
    fn snapshot_round_trip_restores_state() {
        let p = fitted_project();
        let json = serde_json::to_string(&ProjectSnapshot::capture(&p)).unwrap();
        let back = project_from_json(&json).unwrap();

        assert_eq!(back.points(), p.points());
        assert_eq!(back.params(), p.params());
        assert_eq!(back.queried_points(), p.queried_points());
        assert_eq!(back.plot_scale(), PlotScale::Linear);
    }

    #[test]
    fn rejects_invalid_saved_point() {
        let json = r#"{"input_points":[{"wind_speed":30.0,"return_period":1.0}]}"#;
        let err = project_from_json(json).unwrap_err();
        match err {
            GumbelError::LoadError { reason } => assert!(reason.contains("input point #1"), "{reason}"),
            other => panic!("expected LoadError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_positive_scale() {
        let json = r#"{"parameters":{"mu":20.0,"scale":-1.0}}"#;
        assert!(matches!(project_from_json(json), Err(GumbelError::LoadError { .. })));
    }

    #[test]
    fn rejects_queries_without_parameters() {
        let json = r#"{"queried_points":[{"kind":"from_period","input_value":50.0,"derived_value":35.0,"return_period":50.0,"wind_speed":35.0}]}"#;
        assert!(matches!(project_from_json(json), Err(GumbelError::LoadError { .. })));
    }

    #[test]
    fn rejects_stale_queries() {
        let p = fitted_project();
        let mut snapshot = ProjectSnapshot::capture(&p);
        if let Some(params) = snapshot.parameters.as_mut() {
            params.mu += 1.0;
        }
        let err = snapshot.restore().unwrap_err();
        match err {
            GumbelError::LoadError { reason } => assert!(reason.contains("stale"), "{reason}"),
            other => panic!("expected LoadError, got {other:?}"),
        }
    }

    #[test]
    fn period_query_below_zero_speed_survives_reload() {
        let mut p = Project::from_points(vec![DataPoint::new(5.0, 1.5), DataPoint::new(30.0, 100.0)]);
        p.fit().unwrap();
        let q = p.query_by_period(1.0001).unwrap();
        assert!(q.wind_speed < 0.0, "V={}", q.wind_speed);

        let json = serde_json::to_string(&ProjectSnapshot::capture(&p)).unwrap();
        let back = project_from_json(&json).unwrap();
        assert_eq!(back.queried_points(), p.queried_points());
    }

    #[test]
    fn speed_query_just_above_one_year_survives_reload() {
        let mut p = Project::from_points(vec![
            DataPoint::new(30.0, 10.0),
            DataPoint::new(35.0, 50.0),
            DataPoint::new(40.0, 100.0),
        ]);
        p.fit().unwrap();
        let q = p.query_by_speed(6.4201).unwrap();
        assert!(q.return_period > 1.0 && q.return_period < 1.0 + 1e-9, "T={}", q.return_period);

        let json = serde_json::to_string(&ProjectSnapshot::capture(&p)).unwrap();
        let back = project_from_json(&json).unwrap();
        assert_eq!(back.queried_points(), p.queried_points());
    }

    #[test]
    fn rejects_stale_speed_query() {
        let p = fitted_project();
        let mut snapshot = ProjectSnapshot::capture(&p);
        let q = snapshot
            .queried_points
            .iter_mut()
            .find(|q| q.kind == QueryKind::FromSpeed)
            .unwrap();
        q.return_period *= 1.01;
        q.derived_value = q.return_period;
        let err = snapshot.restore().unwrap_err();
        match err {
            GumbelError::LoadError { reason } => assert!(reason.contains("stale return period"), "{reason}"),
            other => panic!("expected LoadError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(project_from_json("{not json"), Err(GumbelError::LoadError { .. })));
        assert!(matches!(
            project_from_json(r#"{"input_points":"oops"}"#),
            Err(GumbelError::LoadError { .. })
        ));
    }

    #[test]
    fn empty_snapshot_is_a_blank_project() {
        let p = project_from_json("{}").unwrap();
        assert!(p.points().is_empty());
        assert!(p.params().is_none());
        assert_eq!(p.plot_scale(), PlotScale::Log);
    }
}
