//! ar-results: run cache, CSV export and configuration reports.

pub mod export;
pub mod hash;
pub mod report;
pub mod store;
pub mod types;

pub use export::{CSV_HEADER, export_csv, write_csv};
pub use hash::compute_run_id;
pub use report::{config_report, write_config_report};
pub use store::RunStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Run {run_id} has non-finite samples in {series}; not stored")]
    NonFinite {
        run_id: String,
        series: &'static str,
    },

    #[error("Corrupt run {run_id}: {what}")]
    Corrupt { run_id: String, what: &'static str },
}
