//! Run execution and caching service.

use std::path::Path;
use std::time::Instant;

use ar_results::{ResultsError, RunManifest, RunStore, compute_run_id};
use ar_sim::{Configuration, EngineOptions, SOLVER_VERSION, SimProgress, Solution};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage};

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
    pub engine: EngineOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: SOLVER_VERSION.to_string(),
            engine: EngineOptions::default(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub configuration: &'a Configuration,
    /// Directory holding the run store; `None` runs without persisting
    pub store_dir: Option<&'a Path>,
    pub options: RunOptions,
}

/// Wall-clock breakdown of a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub solve_time_s: f64,
    pub save_time_s: f64,
    pub load_cache_time_s: f64,
    pub total_time_s: f64,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    /// Absent when the run was not persisted
    pub manifest: Option<RunManifest>,
    pub solution: Solution,
    pub loaded_from_cache: bool,
    pub timing: RunTimingSummary,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
    sim: Option<SimProgress>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            message,
            sim,
        });
    }
}

/// Execute or load a run based on request.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    ensure_run_with_progress(request, None)
}

/// Execute or load a run and stream progress events.
pub fn ensure_run_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    let mut timing = RunTimingSummary::default();

    request.configuration.validate()?;
    let run_id = compute_run_id(
        request.configuration,
        &request.options.engine.output_options(),
        &request.options.solver_version,
    );

    let store = match request.store_dir {
        Some(dir) => Some(RunStore::in_dir(dir)?),
        None => None,
    };

    if let Some(store) = &store
        && request.options.use_cache
    {
        emit_progress(
            &mut progress_cb,
            RunStage::CheckingCache,
            started,
            Some("Checking run cache".to_string()),
            None,
        );

        if store.has_run(&run_id) {
            emit_progress(
                &mut progress_cb,
                RunStage::LoadingCachedResult,
                started,
                Some("Loading cached run".to_string()),
                None,
            );

            let load_started = Instant::now();
            match store.load_solution(&run_id) {
                Ok((manifest, solution)) => {
                    timing.load_cache_time_s = load_started.elapsed().as_secs_f64();
                    timing.total_time_s = started.elapsed().as_secs_f64();
                    info!(run_id = %run_id, name = %solution.name, "loaded cached run");

                    emit_progress(
                        &mut progress_cb,
                        RunStage::Completed,
                        started,
                        Some("Loaded cached run".to_string()),
                        None,
                    );

                    return Ok(RunResponse {
                        run_id,
                        manifest: Some(manifest),
                        solution,
                        loaded_from_cache: true,
                        timing,
                    });
                }
                Err(e) => {
                    warn!(run_id = %run_id, error = %e, "cached run unreadable, re-running");
                }
            }
        }
    }

    emit_progress(
        &mut progress_cb,
        RunStage::Simulating,
        started,
        Some("Running simulation".to_string()),
        None,
    );

    let solve_started = Instant::now();
    let solution = {
        let mut on_step = |p: SimProgress| {
            emit_progress(&mut progress_cb, RunStage::Simulating, started, None, Some(p));
        };
        ar_sim::run_with_progress(
            request.configuration.clone(),
            request.configuration.tables(),
            &request.options.engine,
            Some(&mut on_step),
        )?
    };
    timing.solve_time_s = solve_started.elapsed().as_secs_f64();

    let manifest = match &store {
        Some(store) => {
            emit_progress(
                &mut progress_cb,
                RunStage::SavingResults,
                started,
                Some("Saving results".to_string()),
                None,
            );
            let save_started = Instant::now();
            let manifest =
                RunManifest::for_solution(run_id.clone(), &solution, &request.options.solver_version);
            let saved = match store.save_run(&manifest, &solution) {
                Ok(()) => Some(manifest),
                Err(e @ ResultsError::NonFinite { .. }) => {
                    warn!(run_id = %run_id, error = %e, "run diverged, not caching");
                    None
                }
                Err(e) => return Err(e.into()),
            };
            timing.save_time_s = save_started.elapsed().as_secs_f64();
            saved
        }
        None => None,
    };

    timing.total_time_s = started.elapsed().as_secs_f64();

    emit_progress(
        &mut progress_cb,
        RunStage::Completed,
        started,
        Some("Run completed".to_string()),
        None,
    );

    Ok(RunResponse {
        run_id,
        manifest,
        solution,
        loaded_from_cache: false,
        timing,
    })
}

/// Stored runs, most recent first.
pub fn list_runs(store_dir: &Path) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::in_dir(store_dir)?;
    Ok(store.list_runs()?)
}

pub fn load_run(store_dir: &Path, run_id: &str) -> AppResult<(RunManifest, Solution)> {
    let store = RunStore::in_dir(store_dir)?;
    Ok(store.load_solution(run_id)?)
}

pub fn delete_run(store_dir: &Path, run_id: &str) -> AppResult<()> {
    let store = RunStore::in_dir(store_dir)?;
    if !store.has_run(run_id) {
        return Err(crate::error::AppError::RunNotFound(run_id.to_string()));
    }
    store.delete_run(run_id)?;
    Ok(())
}
