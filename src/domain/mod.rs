//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - calibration input (`DataPoint`)
//! - fitted parameters (`GumbelParameters`) and diagnostics (`FitQuality`)
//! - query results (`QueriedPoint`, `QueryKind`)
//! - presentation preferences that are persisted (`PlotScale`)

pub mod types;

pub use types::*;
