//! One open document: the editable input point set, the query engine holding
//! the active fit, and the plot scale preference.
//!
//! Front-ends keep one `Project` per document instead of ambient globals.

use tracing::{info, warn};

use crate::domain::{DataPoint, GumbelParameters, PlotScale, QueriedPoint};
use crate::engine::QueryEngine;
use crate::error::GumbelError;
use crate::models::fit;

#[derive(Debug, Clone, Default)]
pub struct Project {
    points: Vec<DataPoint>,
    engine: QueryEngine,
    plot_scale: PlotScale,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub(crate) fn from_parts(points: Vec<DataPoint>, engine: QueryEngine, plot_scale: PlotScale) -> Self {
        Self {
            points,
            engine,
            plot_scale,
        }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Editing the input set never refits; the current parameters stay active
    /// until `fit` succeeds again.
    pub fn add_point(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn update_point(&mut self, index: usize, point: DataPoint) -> Option<DataPoint> {
        let slot = self.points.get_mut(index)?;
        Some(std::mem::replace(slot, point))
    }

    pub fn remove_point(&mut self, index: usize) -> Option<DataPoint> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    /// Fit the current input set.
    ///
    /// On success the new parameters replace the old ones and all stored
    /// queries are dropped. On failure nothing changes.
    pub fn fit(&mut self) -> Result<GumbelParameters, GumbelError> {
        match fit(&self.points) {
            Ok(params) => {
                info!(
                    n = self.points.len(),
                    mu = params.mu,
                    scale = params.scale,
                    "fitted Gumbel parameters"
                );
                self.engine.set_model(params);
                Ok(params)
            }
            Err(err) => {
                warn!(n = self.points.len(), error = %err, "fit failed; keeping previous model");
                Err(err)
            }
        }
    }

    pub fn params(&self) -> Option<&GumbelParameters> {
        self.engine.params()
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut QueryEngine {
        &mut self.engine
    }

    pub fn query_by_period(&mut self, t: f64) -> Result<QueriedPoint, GumbelError> {
        self.engine.query_by_period(t)
    }

    pub fn query_by_speed(&mut self, v: f64) -> Result<QueriedPoint, GumbelError> {
        self.engine.query_by_speed(v)
    }

    pub fn queried_points(&self) -> &[QueriedPoint] {
        self.engine.list_queried_points()
    }

    pub fn clear_queries(&mut self) {
        self.engine.clear();
    }

    pub fn plot_scale(&self) -> PlotScale {
        self.plot_scale
    }

    pub fn set_plot_scale(&mut self, scale: PlotScale) {
        self.plot_scale = scale;
    }
}
