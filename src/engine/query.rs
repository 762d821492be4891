//! Query engine: answers period → speed and speed → period questions against
//! the current fitted parameters and remembers the answers.
//!
//! The remembered list is the single feed for plot overlays and report tables,
//! in insertion order. Installing new parameters empties it, so every stored
//! answer was computed with the active parameters.

use tracing::debug;

use crate::domain::{GumbelParameters, QueriedPoint};
use crate::error::GumbelError;
use crate::models::{evaluate, invert, nearest_curve_point};

#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    params: Option<GumbelParameters>,
    queried: Vec<QueriedPoint>,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with parameters already installed.
    pub fn with_model(params: GumbelParameters) -> Self {
        Self {
            params: Some(params),
            queried: Vec::new(),
        }
    }

    /// Rebuild an engine from persisted state without re-deriving anything.
    ///
    /// The caller (snapshot loading) is responsible for checking that the
    /// queried points belong to `params`.
    pub(crate) fn restore(params: Option<GumbelParameters>, queried: Vec<QueriedPoint>) -> Self {
        Self { params, queried }
    }

    /// Replace the parameters and discard every stored query.
    pub fn set_model(&mut self, params: GumbelParameters) {
        let dropped = self.queried.len();
        self.params = Some(params);
        self.queried.clear();
        debug!(mu = params.mu, scale = params.scale, dropped, "installed new Gumbel parameters");
    }

    pub fn params(&self) -> Option<&GumbelParameters> {
        self.params.as_ref()
    }

    pub fn has_model(&self) -> bool {
        self.params.is_some()
    }

    fn require_model(&self) -> Result<&GumbelParameters, GumbelError> {
        self.params.as_ref().ok_or(GumbelError::NoModel)
    }

    /// Wind speed for return period `t`; appends a `FromPeriod` entry on success.
    pub fn query_by_period(&mut self, t: f64) -> Result<QueriedPoint, GumbelError> {
        let params = self.require_model()?;
        let v = evaluate(params, t)?;
        let point = QueriedPoint::from_period(t, v);
        self.queried.push(point);
        debug!(return_period = t, wind_speed = v, "answered period query");
        Ok(point)
    }

    /// Return period for wind speed `v`; appends a `FromSpeed` entry on success.
    pub fn query_by_speed(&mut self, v: f64) -> Result<QueriedPoint, GumbelError> {
        let params = self.require_model()?;
        let t = invert(params, v)?;
        let point = QueriedPoint::from_speed(v, t);
        self.queried.push(point);
        debug!(wind_speed = v, return_period = t, "answered speed query");
        Ok(point)
    }

    /// Stored queries in insertion order.
    pub fn list_queried_points(&self) -> &[QueriedPoint] {
        &self.queried
    }

    /// Forget all stored queries; the parameters stay.
    pub fn clear(&mut self) {
        self.queried.clear();
    }

    /// Speed on the curve at a picked return period. Does not record a query.
    pub fn curve_point_at(&self, t: f64) -> Result<(f64, f64), GumbelError> {
        nearest_curve_point(self.require_model()?, t)
    }
}
