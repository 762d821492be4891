//! Input/output helpers.
//!
//! - CSV ingest + validation of calibration pairs (`ingest`)
//! - project snapshot save/load (`project`)
//! - CSV exports of queries (`export`) and the sampled curve (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;
pub mod project;

pub use curve::*;
pub use export::*;
pub use ingest::*;
pub use project::*;
