//! Content-based hashing for run IDs.

use ar_sim::{Configuration, OutputOptions};
use sha2::{Digest, Sha256};

pub fn compute_run_id(
    configuration: &Configuration,
    output: &OutputOptions,
    solver_version: &str,
) -> String {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_string(configuration).unwrap_or_default();
    hasher.update(config_json.as_bytes());

    let output_json = serde_json::to_string(output).unwrap_or_default();
    hasher.update(output_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    format!("{:x}", hasher.finalize())
}
