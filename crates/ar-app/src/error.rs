//! Error types for the ar-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives front-ends one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read configuration file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write configuration file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration format error: {0}")]
    ConfigFormat(String),

    #[error("Unsupported configuration file extension: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration validation failed: {0}")]
    Validation(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Run worker stopped without a result")]
    WorkerDisconnected,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ar-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ar_sim::SimError> for AppError {
    fn from(err: ar_sim::SimError) -> Self {
        match err {
            ar_sim::SimError::InvalidConfig { .. } | ar_sim::SimError::NonFinite { .. } => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

impl From<ar_results::ResultsError> for AppError {
    fn from(err: ar_results::ResultsError) -> Self {
        match err {
            ar_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
