//! Error types.
//!
//! Two layers:
//! - `GumbelError`: typed, recoverable failures of the fitting/query core. Every
//!   variant carries the offending value so a front-end can point at it.
//! - `AppError`: the process boundary (message + exit code), used by the CLI,
//!   the TUI and file I/O.

use thiserror::Error;

/// Failures raised by fitting, evaluation, inversion, querying and loading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GumbelError {
    #[error("Insufficient data: at least 2 points are required to fit, found {found}.")]
    InsufficientData { found: usize },

    #[error(
        "Invalid input point #{} (T={return_period}, V={wind_speed}): {reason}",
        .index + 1
    )]
    InvalidInput {
        index: usize,
        wind_speed: f64,
        return_period: f64,
        reason: String,
    },

    #[error("Degenerate fit: {reason}")]
    FitDegenerate { reason: String },

    #[error("Invalid return period {value}: {reason}")]
    InvalidReturnPeriod { value: f64, reason: String },

    #[error("Invalid wind speed {value}: {reason}")]
    InvalidWindSpeed { value: f64, reason: String },

    #[error("No fitted model: fit the Gumbel parameters before querying.")]
    NoModel,

    #[error("Failed to load project: {reason}")]
    LoadError { reason: String },
}

impl GumbelError {
    pub fn load(reason: impl Into<String>) -> Self {
        GumbelError::LoadError {
            reason: reason.into(),
        }
    }

    /// Exit code used when this error reaches the process boundary.
    pub fn exit_code(&self) -> u8 {
        match self {
            GumbelError::InvalidInput { .. } | GumbelError::LoadError { .. } => 2,
            GumbelError::InsufficientData { .. } | GumbelError::NoModel => 3,
            GumbelError::FitDegenerate { .. }
            | GumbelError::InvalidReturnPeriod { .. }
            | GumbelError::InvalidWindSpeed { .. } => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<GumbelError> for AppError {
    fn from(err: GumbelError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_is_one_based() {
        let err = GumbelError::InvalidInput {
            index: 0,
            wind_speed: 30.0,
            return_period: 1.0,
            reason: "return period must be > 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#1"), "{msg}");
        assert!(msg.contains("T=1"), "{msg}");
    }

    #[test]
    fn app_error_keeps_core_exit_code() {
        let app: AppError = GumbelError::NoModel.into();
        assert_eq!(app.exit_code(), 3);
        let app: AppError = GumbelError::FitDegenerate {
            reason: "x".to_string(),
        }
        .into();
        assert_eq!(app.exit_code(), 4);
    }
}
