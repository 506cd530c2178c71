//! Background worker that runs Directory Service requests.
//!
//! The TUI event loop is synchronous. HTTP calls run on a dedicated thread
//! that owns a current-thread tokio runtime. Requests go in over one
//! `std::sync::mpsc` channel and settled responses come back over another,
//! so the UI only ever does a non-blocking drain.
//!
//! Requests are executed one at a time in submission order.

use crate::directory::{DirectoryRequest, DirectoryResponse, DirectoryService};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Errors from the worker bridge itself (not from the requests it runs).
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The tokio runtime could not be created.
    #[error("Failed to build directory worker runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The OS refused to spawn the worker thread.
    #[error("Failed to spawn directory worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The worker thread has exited; no further responses will arrive.
    #[error("Directory worker disconnected")]
    Disconnected,
}

/// Handle to the background directory thread.
///
/// Dropping the handle closes the request channel; the thread finishes the
/// request it is running and exits.
#[derive(Debug)]
pub struct DirectoryWorker {
    requests: Sender<DirectoryRequest>,
    responses: Receiver<DirectoryResponse>,
    _thread: Option<JoinHandle<()>>,
}

impl DirectoryWorker {
    /// Spawn a worker thread serving requests against `service`.
    ///
    /// # Errors
    ///
    /// Returns `WorkerError::Runtime` or `WorkerError::Spawn` if the runtime
    /// or thread cannot be created.
    pub fn spawn<S>(service: S) -> Result<Self, WorkerError>
    where
        S: DirectoryService + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(WorkerError::Runtime)?;

        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        let thread = thread::Builder::new()
            .name("directory-worker".to_string())
            .spawn(move || run_worker(runtime, service, request_rx, response_tx))
            .map_err(WorkerError::Spawn)?;

        Ok(Self {
            requests: request_tx,
            responses: response_rx,
            _thread: Some(thread),
        })
    }

    /// Queue a request.
    ///
    /// # Errors
    ///
    /// Returns `WorkerError::Disconnected` if the worker thread has exited.
    /// The request was not sent; the caller must settle it locally.
    pub fn submit(&self, request: DirectoryRequest) -> Result<(), WorkerError> {
        debug!(?request, "Submitting directory request");
        self.requests
            .send(request)
            .map_err(|_| WorkerError::Disconnected)
    }

    /// Drain every response that has settled since the last call.
    ///
    /// Non-blocking. Returns an empty vec when nothing is ready.
    ///
    /// # Errors
    ///
    /// Returns `WorkerError::Disconnected` once the worker has exited and
    /// all of its responses have been drained.
    pub fn poll(&self) -> Result<Vec<DirectoryResponse>, WorkerError> {
        let mut settled = Vec::new();
        loop {
            match self.responses.try_recv() {
                Ok(response) => settled.push(response),
                Err(TryRecvError::Empty) => return Ok(settled),
                Err(TryRecvError::Disconnected) if settled.is_empty() => {
                    return Err(WorkerError::Disconnected)
                }
                Err(TryRecvError::Disconnected) => return Ok(settled),
            }
        }
    }

    /// Worker wired to caller-owned channels instead of a thread.
    ///
    /// Tests drive both ends: they read what the UI submitted and inject
    /// responses in whatever order they like.
    #[cfg(test)]
    pub(crate) fn from_channels(
        requests: Sender<DirectoryRequest>,
        responses: Receiver<DirectoryResponse>,
    ) -> Self {
        Self {
            requests,
            responses,
            _thread: None,
        }
    }
}

fn run_worker<S>(
    runtime: Runtime,
    service: S,
    requests: Receiver<DirectoryRequest>,
    responses: Sender<DirectoryResponse>,
) where
    S: DirectoryService,
{
    info!("Directory worker started");

    while let Ok(request) = requests.recv() {
        let response = runtime.block_on(request.execute(&service));
        if responses.send(response).is_err() {
            break;
        }
    }

    info!("Directory worker stopped");
}
