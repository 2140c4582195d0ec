//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered before or during a simulation run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<ar_core::CoreError> for SimError {
    fn from(e: ar_core::CoreError) -> Self {
        match e {
            ar_core::CoreError::NonFinite { what, value } => SimError::NonFinite { what, value },
        }
    }
}
