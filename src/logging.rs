//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for reports and CSV output. The
//! filter comes from `GW_LOG` (any `EnvFilter` directive) and falls back to
//! the `-v` count.
//!
//! The TUI owns the terminal, so it never logs to stderr; set `GW_LOG_FILE` to
//! capture its logs in a file instead.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Env var holding an `EnvFilter` directive, e.g. `GW_LOG=gumbel_wind=debug`.
pub const LOG_FILTER_ENV: &str = "GW_LOG";
/// Env var naming a log file for the TUI.
pub const LOG_FILE_ENV: &str = "GW_LOG_FILE";

/// Map `-v` occurrences to a default level.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)))
}

/// Install the stderr subscriber used by the batch commands.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init_cli(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Install a file subscriber for the TUI when `GW_LOG_FILE` is set.
///
/// Returns the log path when logging was enabled.
pub fn init_tui(verbosity: u8) -> Result<Option<PathBuf>, AppError> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from) else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AppError::new(2, format!("Failed to open log file '{}': {e}", path.display())))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(Some(path))
}
