//! Background run on its own thread with a pollable progress fraction.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use ar_sim::{Configuration, Progress};

use crate::error::{AppError, AppResult};
use crate::progress::{RunProgressEvent, RunStage};
use crate::run_service::{RunOptions, RunRequest, RunResponse, ensure_run_with_progress};

#[derive(Debug)]
pub enum WorkerMessage {
    /// Stage change; per-step progress goes through the shared fraction instead
    Stage(RunProgressEvent),
    Complete(Box<RunResponse>),
    Error { message: String },
}

pub struct RunWorker {
    progress: Arc<Progress>,
    rx: Receiver<WorkerMessage>,
    handle: Option<JoinHandle<()>>,
    /// Terminal message picked up while polling
    outcome: Option<WorkerMessage>,
}

impl RunWorker {
    /// Spawn a thread running `configuration`. The worker owns its copy.
    pub fn start(
        configuration: Configuration,
        options: RunOptions,
        store_dir: Option<PathBuf>,
    ) -> Self {
        let (tx, rx) = channel();
        let progress = Arc::new(Progress::new());
        let shared = Arc::clone(&progress);

        let handle = thread::spawn(move || {
            Self::run_simulation(&configuration, options, store_dir, &shared, &tx);
        });

        Self {
            progress,
            rx,
            handle: Some(handle),
            outcome: None,
        }
    }

    fn run_simulation(
        configuration: &Configuration,
        options: RunOptions,
        store_dir: Option<PathBuf>,
        progress: &Progress,
        tx: &Sender<WorkerMessage>,
    ) {
        let request = RunRequest {
            configuration,
            store_dir: store_dir.as_deref(),
            options,
        };

        let mut on_event = |event: RunProgressEvent| {
            progress.set(event.fraction_complete());
            if event.sim.is_none() {
                let _ = tx.send(WorkerMessage::Stage(event));
            }
        };

        let message = match ensure_run_with_progress(&request, Some(&mut on_event)) {
            Ok(response) => WorkerMessage::Complete(Box::new(response)),
            Err(e) => WorkerMessage::Error {
                message: e.to_string(),
            },
        };
        // The receiver may already be gone
        let _ = tx.send(message);
    }

    /// Completed fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    pub fn progress_handle(&self) -> Arc<Progress> {
        Arc::clone(&self.progress)
    }

    /// Drain pending messages without blocking; returns the latest stage seen.
    pub fn poll_stage(&mut self) -> Option<RunStage> {
        let mut latest = None;
        while self.outcome.is_none() {
            match self.rx.try_recv() {
                Ok(WorkerMessage::Stage(event)) => latest = Some(event.stage),
                Ok(terminal) => self.outcome = Some(terminal),
                Err(_) => break,
            }
        }
        latest
    }

    /// True once the result is waiting or the thread has exited.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some() || self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Block until the run finishes and return its response.
    pub fn wait(mut self) -> AppResult<RunResponse> {
        let outcome = loop {
            let message = match self.outcome.take() {
                Some(message) => Ok(message),
                None => self.rx.recv(),
            };
            match message {
                Ok(WorkerMessage::Stage(_)) => continue,
                Ok(WorkerMessage::Complete(response)) => break Ok(*response),
                Ok(WorkerMessage::Error { message }) => break Err(AppError::Simulation(message)),
                Err(_) => break Err(AppError::WorkerDisconnected),
            }
        };
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        outcome
    }
}
