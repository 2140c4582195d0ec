//! Run storage API.
//!
//! Layout under the store root, one directory per run id:
//! `manifest.json`, `configuration.json` and `timeseries.jsonl`.

use std::fs;
use std::path::{Path, PathBuf};

use ar_sim::{Configuration, Solution};
use tracing::debug;

use crate::types::{RunManifest, TimeseriesRecord, fill_solution, records_from_solution};
use crate::{ResultsError, ResultsResult};

const MANIFEST_FILE: &str = "manifest.json";
const CONFIGURATION_FILE: &str = "configuration.json";
const TIMESERIES_FILE: &str = "timeseries.jsonl";

#[derive(Clone, Debug)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store at `<dir>/.autorotation/runs`.
    pub fn in_dir(dir: &Path) -> ResultsResult<Self> {
        Self::new(dir.join(".autorotation").join("runs"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id).join(MANIFEST_FILE).exists()
    }

    /// Persist a run. Solutions with NaN or infinite samples are refused,
    /// since JSON cannot carry them back.
    pub fn save_run(&self, manifest: &RunManifest, solution: &Solution) -> ResultsResult<()> {
        if let Some(series) = solution.first_non_finite() {
            return Err(ResultsError::NonFinite {
                run_id: manifest.run_id.clone(),
                series: series.title(),
            });
        }

        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let config_json = serde_json::to_string_pretty(&solution.configuration)?;
        fs::write(run_dir.join(CONFIGURATION_FILE), config_json)?;

        let mut timeseries_content = String::new();
        for record in records_from_solution(solution) {
            let line = serde_json::to_string(&record)?;
            timeseries_content.push_str(&line);
            timeseries_content.push('\n');
        }
        fs::write(run_dir.join(TIMESERIES_FILE), timeseries_content)?;

        // Manifest last: its presence marks the run as complete
        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(run_dir.join(MANIFEST_FILE), manifest_json)?;

        debug!(run_id = %manifest.run_id, samples = solution.len(), "saved run");
        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let manifest_path = self.run_dir(run_id).join(MANIFEST_FILE);

        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_configuration(&self, run_id: &str) -> ResultsResult<Configuration> {
        let path = self.run_dir(run_id).join(CONFIGURATION_FILE);
        if !path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_timeseries(&self, run_id: &str) -> ResultsResult<Vec<TimeseriesRecord>> {
        let timeseries_path = self.run_dir(run_id).join(TIMESERIES_FILE);

        if !timeseries_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(timeseries_path)?;
        let mut records = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let record: TimeseriesRecord = serde_json::from_str(line)?;
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Rebuild the stored solution with its saved name and id.
    pub fn load_solution(&self, run_id: &str) -> ResultsResult<(RunManifest, Solution)> {
        let manifest = self.load_manifest(run_id)?;
        let configuration = self.load_configuration(run_id)?;
        let records = self.load_timeseries(run_id)?;

        if records.len() != manifest.sample_count {
            return Err(ResultsError::Corrupt {
                run_id: run_id.to_string(),
                what: "sample count does not match manifest",
            });
        }

        let mut solution =
            Solution::restore(manifest.solution_id, manifest.solution_name.clone(), configuration);
        fill_solution(&mut solution, &records);
        Ok((manifest, solution))
    }

    /// Every complete run in the store, most recent first.
    pub fn list_runs(&self) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(runs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let run_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&run_id) {
                    runs.push(manifest);
                }
            }
        }

        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(runs)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        let run_dir = self.run_dir(run_id);
        if run_dir.exists() {
            fs::remove_dir_all(run_dir)?;
        }
        Ok(())
    }
}
