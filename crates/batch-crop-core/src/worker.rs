//! Background batch execution for interactive front-ends.
//!
//! The runner executes on a dedicated thread and forwards every
//! progress event through an order-preserving single-producer channel.
//! A presentation layer polls [`BatchHandle::drain`] on a fixed timer
//! and never reaches into the runner's state directly; the only other
//! coordination points are the cancellation token and the final join.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::cancel::CancelToken;
use crate::domain::{BatchJob, BatchSummary};
use crate::error::BatchError;
use crate::ports::{CropEngine, ProgressEvent, ProgressSink};
use crate::runner::run_batch;

/// Progress sink forwarding events into an mpsc channel.
///
/// Sending never blocks (the channel is unbounded), so a slow consumer
/// cannot stall the worker; events sent after the receiver is dropped
/// are discarded.
struct ChannelSink {
    tx: Mutex<Sender<ProgressEvent>>,
}

impl ChannelSink {
    fn new(tx: Sender<ProgressEvent>) -> Self {
        Self { tx: Mutex::new(tx) }
    }
}

impl ProgressSink for ChannelSink {
    fn on_event(&self, event: ProgressEvent) {
        if let Ok(tx) = self.tx.lock() {
            // A dropped receiver means nobody is watching anymore.
            let _ = tx.send(event);
        }
    }
}

/// Spawns batch runs on dedicated worker threads.
pub struct BatchWorker;

impl BatchWorker {
    /// Starts `job` on a new thread and returns the handle used to
    /// observe and control it.
    #[must_use]
    pub fn spawn(job: BatchJob, engine: Arc<dyn CropEngine>) -> BatchHandle {
        let (tx, rx) = mpsc::channel();
        let cancel = CancelToken::new();
        let worker_cancel = cancel.clone();

        let join = thread::spawn(move || {
            let sink = ChannelSink::new(tx);
            let result = run_batch(&job, engine.as_ref(), &sink, &worker_cancel);
            debug!("Worker thread finished");
            result
        });

        BatchHandle { rx, cancel, join }
    }
}

/// Handle to one running (or finished) background batch.
pub struct BatchHandle {
    rx: Receiver<ProgressEvent>,
    cancel: CancelToken,
    join: JoinHandle<Result<BatchSummary, BatchError>>,
}

impl BatchHandle {
    /// Takes every event currently queued without blocking.
    ///
    /// Suited to a poll-timer loop: a busy worker never stalls the
    /// caller, and draining preserves emission order.
    #[must_use]
    pub fn drain(&self) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Requests cooperative cancellation; the loop stops before the
    /// next item.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the worker thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the worker and returns its summary.
    ///
    /// # Errors
    ///
    /// Returns the worker's fatal pre-flight [`BatchError`], or an
    /// error if the worker thread panicked.
    pub fn join(self) -> anyhow::Result<BatchSummary> {
        match self.join.join() {
            Ok(result) => Ok(result?),
            Err(_) => Err(anyhow::anyhow!("batch worker thread panicked")),
        }
    }
}
