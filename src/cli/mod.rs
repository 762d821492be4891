//! Command-line parsing for the Gumbel wind speed estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DataPoint, PlotScale};
use crate::io::parse_point_arg;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gw", version, about = "Gumbel extreme wind speed estimator")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `GW_LOG` overrides.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a Gumbel model to (return period, wind speed) pairs and answer queries.
    Fit(FitArgs),
    /// Run more queries against a saved project.
    Query(QueryArgs),
    /// Print or write the full estimation report for a saved project.
    Report(ReportArgs),
    /// Generate synthetic calibration pairs from a known Gumbel distribution.
    Sample(SampleArgs),
    /// Launch the interactive TUI.
    ///
    /// Points, fit, queries and plot scale are the same objects `gw fit` works
    /// with; the TUI just edits them interactively.
    Tui(TuiArgs),
}

/// Options for `gw fit`.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// CSV file with `return_period` and `wind_speed` columns.
    #[arg(short = 'f', long, value_name = "CSV")]
    pub file: Option<PathBuf>,

    /// Inline calibration pair `T:V` (repeatable), added after the CSV rows.
    #[arg(long = "point", value_name = "T:V", value_parser = parse_point_arg)]
    pub points: Vec<DataPoint>,

    /// Estimate the wind speed for this return period in years (repeatable).
    #[arg(long = "period", value_name = "YEARS")]
    pub periods: Vec<f64>,

    /// Estimate the return period for this wind speed in m/s (repeatable).
    #[arg(long = "speed", value_name = "M/S")]
    pub speeds: Vec<f64>,

    /// Return-period axis scale for plots and curve exports.
    #[arg(long, value_enum, default_value_t = PlotScale::Log)]
    pub scale: PlotScale,

    #[command(flatten)]
    pub plot: PlotOptions,

    /// Save the fitted project (points, parameters, queries) as JSON.
    #[arg(long, value_name = "GBLPROJ")]
    pub save: Option<PathBuf>,

    /// Write the full estimation report to this file.
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Export queried values to CSV.
    #[arg(long = "export-queries", value_name = "CSV")]
    pub export_queries: Option<PathBuf>,

    /// Export the sampled fitted curve to CSV.
    #[arg(long = "export-curve", value_name = "CSV")]
    pub export_curve: Option<PathBuf>,
}

/// Terminal plot switches shared by commands that draw.
#[derive(Debug, Args, Clone)]
pub struct PlotOptions {
    /// Skip the ASCII plot (drawn by default).
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

impl PlotOptions {
    pub fn enabled(&self) -> bool {
        !self.no_plot
    }
}

/// Options for `gw query`.
///
/// Queries run in the order given: all `--period` values first, then `--speed`.
#[derive(Debug, Args, Clone)]
pub struct QueryArgs {
    /// Project file saved by `gw fit --save`. Prompts when omitted.
    #[arg(value_name = "GBLPROJ")]
    pub project: Option<PathBuf>,

    /// Estimate the wind speed for this return period in years (repeatable).
    #[arg(long = "period", value_name = "YEARS")]
    pub periods: Vec<f64>,

    /// Estimate the return period for this wind speed in m/s (repeatable).
    #[arg(long = "speed", value_name = "M/S")]
    pub speeds: Vec<f64>,

    /// Refit from the stored points before querying (drops saved queries).
    #[arg(long)]
    pub refit: bool,

    /// Write the project back with the new queries appended.
    #[arg(long)]
    pub save: bool,
}

/// Options for `gw report`.
#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    /// Project file saved by `gw fit --save`. Prompts when omitted.
    #[arg(value_name = "GBLPROJ")]
    pub project: Option<PathBuf>,

    /// Write the report to a file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Refit from the stored points first.
    #[arg(long)]
    pub refit: bool,

    /// Override the project's plot scale.
    #[arg(long, value_enum)]
    pub scale: Option<PlotScale>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Options for `gw sample`.
#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    /// Location parameter of the generating distribution (m/s).
    #[arg(long, default_value_t = 25.0)]
    pub mu: f64,

    /// Scale parameter 1/alpha of the generating distribution (m/s).
    #[arg(long, default_value_t = 4.0)]
    pub scale: f64,

    /// Number of annual maxima (years of record).
    #[arg(short = 'n', long, default_value_t = 30)]
    pub years: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output CSV (stdout when omitted).
    #[arg(short = 'o', long, value_name = "CSV")]
    pub output: Option<PathBuf>,
}

/// Options for `gw tui`.
#[derive(Debug, Args, Clone, Default)]
pub struct TuiArgs {
    /// Open a saved project.
    #[arg(value_name = "GBLPROJ", conflicts_with = "file")]
    pub project: Option<PathBuf>,

    /// Start from the points in a CSV file.
    #[arg(short = 'f', long, value_name = "CSV")]
    pub file: Option<PathBuf>,
}
