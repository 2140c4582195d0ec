//! Shared application service layer for the autorotation solver.
//!
//! Front-ends go through this crate for configuration files, cached run
//! execution and background runs.

pub mod config_service;
pub mod error;
pub mod progress;
pub mod run_service;
pub mod worker;

// Re-export key types for convenience
pub use config_service::{
    ConfigFormat, ConfigOverrides, load_config, parse_config, save_config, to_config_string,
};
pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage};
pub use run_service::{
    RunOptions, RunRequest, RunResponse, RunTimingSummary, delete_run,
    ensure_run, ensure_run_with_progress, list_runs, load_run,
};
pub use worker::{RunWorker, WorkerMessage};

pub use ar_sim::SOLVER_VERSION;
