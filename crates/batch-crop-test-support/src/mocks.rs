//! Mock implementations of core port traits.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

use batch_crop_core::{CropEngine, CropRect, ProgressEvent, ProgressSink};

/// One recorded [`MockCropEngine`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropCall {
    /// Source path the runner asked to open.
    pub source: PathBuf,
    /// Destination path the runner derived.
    pub dest: PathBuf,
    /// The shared crop rectangle.
    pub rect: CropRect,
}

/// Mock implementation of [`CropEngine`] for testing.
///
/// Records every call, fails on configured filenames, and writes a
/// one-byte marker to the destination on success so filesystem effects
/// are observable. A [`gated`](MockCropEngine::gated) engine
/// additionally blocks inside each call until the test releases a
/// permit, for deterministic interleaving in worker and cancellation
/// tests.
#[derive(Default)]
pub struct MockCropEngine {
    fail_names: Vec<String>,
    gate: Option<Mutex<Receiver<()>>>,
    calls: Arc<Mutex<Vec<CropCall>>>,
}

impl MockCropEngine {
    /// Creates an engine that succeeds for every file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine failing for the given base filenames.
    #[must_use]
    pub fn failing_on<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fail_names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Creates an engine that blocks inside each call until one permit
    /// is sent on the returned channel.
    ///
    /// Dropping the sender fails any call still waiting.
    #[must_use]
    pub fn gated() -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let engine = Self {
            gate: Some(Mutex::new(rx)),
            ..Self::default()
        };
        (engine, tx)
    }

    /// Returns all recorded calls, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<CropCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CropEngine for MockCropEngine {
    fn crop_file(&self, source: &Path, dest: &Path, rect: CropRect) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CropCall {
                source: source.to_path_buf(),
                dest: dest.to_path_buf(),
                rect,
            });

        if let Some(gate) = &self.gate {
            gate.lock().unwrap_or_else(PoisonError::into_inner).recv()?;
        }

        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if self.fail_names.iter().any(|f| f == name) {
            anyhow::bail!("mock failure for {name}");
        }

        std::fs::write(dest, [0u8])?;
        Ok(())
    }
}

/// Mock implementation of [`ProgressSink`] for testing.
///
/// Captures events for later assertions.
#[derive(Default)]
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured events, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the total announced by the `Started` event, if any.
    #[must_use]
    pub fn started_total(&self) -> Option<usize> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Started { total } => Some(*total),
            _ => None,
        })
    }

    /// Returns the number of `ItemSucceeded` events.
    #[must_use]
    pub fn succeeded_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::ItemSucceeded { .. }))
            .count()
    }

    /// Returns the number of `ItemFailed` events.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::ItemFailed { .. }))
            .count()
    }

    /// Returns the counts from the `Completed` event, if any.
    #[must_use]
    pub fn completed(&self) -> Option<(usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Completed { succeeded, total } => Some((*succeeded, *total)),
            _ => None,
        })
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
