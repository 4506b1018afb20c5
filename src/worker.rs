//! Background export worker with fire-and-replace scheduling.
//!
//! Theme generation runs on a dedicated thread so the caller's input loop is
//! never blocked. Every request supersedes the ones before it: requests that
//! are already stale when dequeued are skipped, and completions for anything
//! but the newest request are discarded on the receiving side.

use crate::config::ExportOptions;
use crate::error::{ExportError, Result};
use crate::generator::generate_theme;
use crate::model::PalettePair;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Monotonic identifier of an export request.
pub type RequestId = u64;

/// A finished export.
#[derive(Debug)]
pub struct ExportOutcome {
    pub id: RequestId,
    pub options: ExportOptions,
    pub result: Result<String>,
}

struct ExportJob {
    id: RequestId,
    pair: Arc<PalettePair>,
    options: ExportOptions,
}

enum WorkerMessage {
    Export(ExportJob),
    Shutdown,
}

/// Dedicated export thread.
pub struct ExportWorker {
    jobs: Sender<WorkerMessage>,
    outcomes: Receiver<ExportOutcome>,
    latest: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl ExportWorker {
    /// Spawn the worker thread.
    pub fn new() -> Result<Self> {
        let (jobs, job_rx) = unbounded();
        let (outcome_tx, outcomes) = unbounded();
        let latest = Arc::new(AtomicU64::new(0));

        let thread_latest = Arc::clone(&latest);
        let handle = thread::Builder::new()
            .name("export-worker".to_string())
            .spawn(move || run_worker(job_rx, outcome_tx, thread_latest))?;

        Ok(Self {
            jobs,
            outcomes,
            latest,
            handle: Some(handle),
        })
    }

    /// Queue an export, superseding every earlier request.
    pub fn request(&self, pair: Arc<PalettePair>, options: ExportOptions) -> Result<RequestId> {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(id, format = %options.format, "queueing export");
        self.jobs
            .send(WorkerMessage::Export(ExportJob { id, pair, options }))
            .map_err(|_| ExportError::WorkerStopped)?;
        Ok(id)
    }

    /// Identifier of the newest request, 0 if none was made.
    pub fn latest_id(&self) -> RequestId {
        self.latest.load(Ordering::SeqCst)
    }

    /// Take the newest request's outcome if it is ready, without blocking.
    pub fn poll(&self) -> Option<ExportOutcome> {
        let mut current = None;
        while let Ok(outcome) = self.outcomes.try_recv() {
            if let Some(outcome) = self.accept(outcome) {
                current = Some(outcome);
            }
        }
        current
    }

    /// Block until the newest request completes or `timeout` elapses.
    ///
    /// Returns `Ok(None)` on timeout.
    pub fn wait_latest(&self, timeout: Duration) -> Result<Option<ExportOutcome>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.outcomes.recv_timeout(remaining) {
                Ok(outcome) => {
                    if let Some(outcome) = self.accept(outcome) {
                        return Ok(Some(outcome));
                    }
                }
                Err(RecvTimeoutError::Timeout) => return Ok(None),
                Err(RecvTimeoutError::Disconnected) => return Err(ExportError::WorkerStopped),
            }
        }
    }

    /// Keep an outcome only if no newer request has been made since.
    fn accept(&self, outcome: ExportOutcome) -> Option<ExportOutcome> {
        if outcome.id == self.latest_id() {
            Some(outcome)
        } else {
            trace!(id = outcome.id, "discarding stale export");
            None
        }
    }
}

impl Drop for ExportWorker {
    fn drop(&mut self) {
        let _ = self.jobs.send(WorkerMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_worker(
    jobs: Receiver<WorkerMessage>,
    outcomes: Sender<ExportOutcome>,
    latest: Arc<AtomicU64>,
) {
    for message in jobs {
        let job = match message {
            WorkerMessage::Export(job) => job,
            WorkerMessage::Shutdown => break,
        };

        if job.id < latest.load(Ordering::SeqCst) {
            trace!(id = job.id, "skipping superseded export");
            continue;
        }

        let result = generate_theme(&job.pair, &job.options);
        let outcome = ExportOutcome {
            id: job.id,
            options: job.options,
            result,
        };
        if outcomes.send(outcome).is_err() {
            break;
        }
    }
    debug!("export worker stopped");
}
