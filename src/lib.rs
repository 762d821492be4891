//! `gumbel-wind` library crate.
//!
//! Extreme wind speed estimation with the Gumbel (Type I extreme value)
//! distribution: fit `V = mu + scale * y(T)` to calibration pairs of return
//! period `T` and wind speed `V`, then answer "speed for a period" and
//! "period for a speed" queries.
//!
//! The binary (`gw`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the CLI and the TUI share one fit/query path

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;
