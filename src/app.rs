//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs logging
//! - parses CLI arguments
//! - dispatches to the command handlers (fit, query, report, sample, tui)
//! - prints results and writes optional exports

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use tracing::info;

use crate::cli::picker::{FileKind, prompt_for_path};
use crate::cli::{Command, FitArgs, QueryArgs, ReportArgs, SampleArgs, TuiArgs};
use crate::data::{SampleConfig, generate_sample};
use crate::domain::GumbelParameters;
use crate::engine::Project;
use crate::error::AppError;
use crate::report::{ReportOptions, format_fit_summary, format_queries, format_query_line, format_report};

pub mod pipeline;

/// Entry point for the `gw` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is fine; it only carries GW_LOG / GW_LOG_FILE.
    let _ = dotenvy::dotenv();

    // We want `gw` and `gw -f points.csv` to behave like `gw tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    if !matches!(cli.command, Command::Tui(_)) {
        crate::logging::init_cli(cli.verbose);
    }

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Query(args) => handle_query(args),
        Command::Report(args) => handle_report(args),
        Command::Sample(args) => handle_sample(args),
        Command::Tui(args) => handle_tui(args, cli.verbose),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let file = match (&args.file, args.points.is_empty()) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(prompt_for_path(FileKind::Csv)?),
        (None, false) => None,
    };

    let points = pipeline::collect_points(file.as_deref(), &args.points)?;
    let mut run = pipeline::run_fit(points, args.scale)?;

    println!("{}", format_fit_summary(&run.params, &run.residuals, &run.quality));

    let answered = pipeline::run_queries(&mut run.project, &args.periods, &args.speeds)?;
    if !answered.is_empty() {
        println!("{}", format_queries(&answered));
    }

    if args.plot.enabled() {
        println!(
            "{}",
            crate::plot::render_ascii_plot(
                &run.params,
                run.project.points(),
                run.project.queried_points(),
                run.project.plot_scale(),
                args.plot.width,
                args.plot.height,
            )
        );
    }

    // Optional outputs.
    if let Some(path) = &args.save {
        crate::io::save_project(path, &run.project)?;
    }
    if let Some(path) = &args.report {
        let opts = ReportOptions {
            plot_width: args.plot.width,
            plot_height: args.plot.height,
        };
        write_report(path, &run.project, &opts)?;
    }
    if let Some(path) = &args.export_queries {
        crate::io::write_queries_csv(path, run.project.queried_points())?;
    }
    if let Some(path) = &args.export_curve {
        crate::io::write_curve_csv(path, &run.params, run.project.plot_scale())?;
    }

    Ok(())
}

fn handle_query(args: QueryArgs) -> Result<(), AppError> {
    let path = resolve_project_path(args.project.as_deref())?;
    let mut project = crate::io::load_project(&path, args.refit)?;
    ensure_fitted(&project, &path)?;

    let answered = pipeline::run_queries(&mut project, &args.periods, &args.speeds)?;
    for q in &answered {
        println!("{}", format_query_line(q));
    }
    if answered.is_empty() {
        // Nothing asked: show what the project already holds.
        println!("{}", format_queries(project.queried_points()));
    }

    if args.save {
        crate::io::save_project(&path, &project)?;
    }
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let path = resolve_project_path(args.project.as_deref())?;
    let mut project = crate::io::load_project(&path, args.refit)?;
    ensure_fitted(&project, &path)?;
    if let Some(scale) = args.scale {
        project.set_plot_scale(scale);
    }

    let opts = ReportOptions {
        plot_width: args.width,
        plot_height: args.height,
    };
    match &args.output {
        Some(out) => write_report(out, &project, &opts),
        None => {
            println!("{}", format_report(&project, &opts, Utc::now())?);
            Ok(())
        }
    }
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = SampleConfig {
        params: GumbelParameters {
            mu: args.mu,
            scale: args.scale,
        },
        years: args.years,
        seed: args.seed,
    };
    let points = generate_sample(&config)?;
    info!(n = points.len(), seed = args.seed, "generated synthetic sample");

    match &args.output {
        Some(path) => crate::io::write_points_csv(path, &points),
        None => crate::io::write_points(std::io::stdout().lock(), &points),
    }
}

fn handle_tui(args: TuiArgs, verbosity: u8) -> Result<(), AppError> {
    crate::logging::init_tui(verbosity)?;
    crate::tui::run(args)
}

fn resolve_project_path(path: Option<&Path>) -> Result<PathBuf, AppError> {
    match path {
        Some(p) => crate::cli::picker::validate_path(p, FileKind::Project),
        None => prompt_for_path(FileKind::Project),
    }
}

fn ensure_fitted(project: &Project, path: &Path) -> Result<(), AppError> {
    if project.params().is_some() {
        return Ok(());
    }
    Err(AppError::new(
        3,
        format!(
            "Project '{}' has no fitted model. Re-run with --refit or fit it with `gw fit`.",
            path.display()
        ),
    ))
}

fn write_report(path: &Path, project: &Project, opts: &ReportOptions) -> Result<(), AppError> {
    let text = format_report(project, opts, Utc::now())?;
    std::fs::write(path, text)
        .map_err(|e| AppError::new(2, format!("Failed to write report '{}': {e}", path.display())))?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}

/// Rewrite argv so `gw` defaults to `gw tui`.
///
/// Rules:
/// - `gw`                        -> `gw tui`
/// - `gw -f points.csv ...`      -> `gw tui -f points.csv ...`
/// - `gw wind.gblproj`           -> `gw tui wind.gblproj`
/// - `gw --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "query" | "report" | "sample" | "tui");
    if is_subcommand {
        return argv;
    }

    // A leading flag or project file is meant for the TUI.
    let is_project_file = Path::new(&arg1)
        .extension()
        .is_some_and(|ext| ext == crate::io::PROJECT_EXTENSION);
    if arg1.starts_with('-') || is_project_file {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
