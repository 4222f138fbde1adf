//! Interactive session state.
//!
//! An interactive front-end owns one [`Session`] and passes it to its
//! rendering and validation code explicitly, instead of scattering the
//! current image, file list, and crop fields across ambient state.
//! Directory pickers, canvas painting, and widget plumbing stay in the
//! front-end; the session covers everything with actual rules in it:
//! coordinate validation, the single-active-batch guard, and the
//! poll/cancel surface of the background worker.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{BatchJob, BatchSummary, CropRect, ImageRef};
use crate::error::BatchError;
use crate::ports::{CropEngine, ProgressEvent};
use crate::worker::{BatchHandle, BatchWorker};

/// Validation and lifecycle errors surfaced to the operator.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A batch is already running; starting another is rejected.
    #[error("a batch is already running")]
    BatchActive,

    /// No input directory has been chosen.
    #[error("no input directory selected")]
    MissingInputDir,

    /// No output directory has been chosen.
    #[error("no output directory selected")]
    MissingOutputDir,

    /// The enumerated file list is empty.
    #[error("no images to process")]
    NoImages,

    /// A coordinate field does not parse as an integer.
    #[error("crop coordinate '{field}' is not a number: {value:?}")]
    BadCoordinate {
        /// Which of the four fields failed.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// Coordinates parsed but do not form a valid rectangle.
    #[error(transparent)]
    Rect(#[from] BatchError),
}

/// State of one interactive cropping session.
#[derive(Default)]
pub struct Session {
    /// Chosen input directory, as entered or picked.
    pub input_dir: String,
    /// Chosen output directory.
    pub output_dir: String,
    /// The four crop coordinate text fields, validated on run start.
    pub left_field: String,
    /// Top coordinate text field.
    pub top_field: String,
    /// Right coordinate text field.
    pub right_field: String,
    /// Bottom coordinate text field.
    pub bottom_field: String,
    /// Enumerated images of the input directory, in listing order.
    pub files: Vec<ImageRef>,
    /// Index of the image shown in the preview, if any.
    pub selected: Option<usize>,
    handle: Option<BatchHandle>,
    last_result: Option<anyhow::Result<BatchSummary>>,
}

impl Session {
    /// Creates a session with the default crop fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            left_field: "100".to_owned(),
            top_field: "100".to_owned(),
            right_field: "500".to_owned(),
            bottom_field: "500".to_owned(),
            ..Self::default()
        }
    }

    /// Replaces the enumerated file list and selects the first entry.
    pub fn set_files(&mut self, files: Vec<ImageRef>) {
        self.selected = if files.is_empty() { None } else { Some(0) };
        self.files = files;
    }

    /// Selects an image for preview, returning it when the index is
    /// in range.
    pub fn select(&mut self, index: usize) -> Option<&ImageRef> {
        if index < self.files.len() {
            self.selected = Some(index);
        }
        self.selected.and_then(|i| self.files.get(i))
    }

    /// Parses and validates the four coordinate fields.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::BadCoordinate`] for non-numeric text
    /// and [`SessionError::Rect`] for non-monotonic coordinates. Runs
    /// before any file I/O.
    pub fn parse_rect(&self) -> Result<CropRect, SessionError> {
        let parse = |field: &'static str, value: &str| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| SessionError::BadCoordinate {
                    field,
                    value: value.to_owned(),
                })
        };

        let left = parse("left", &self.left_field)?;
        let top = parse("top", &self.top_field)?;
        let right = parse("right", &self.right_field)?;
        let bottom = parse("bottom", &self.bottom_field)?;

        Ok(CropRect::new(left, top, right, bottom)?)
    }

    /// Whether a batch is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Validates the session and starts a background batch.
    ///
    /// # Errors
    ///
    /// Rejects a second concurrent batch with
    /// [`SessionError::BatchActive`]; otherwise fails on the same
    /// validations an operator sees before any file is touched.
    pub fn start_batch(&mut self, engine: Arc<dyn CropEngine>) -> Result<(), SessionError> {
        if self.is_running() {
            return Err(SessionError::BatchActive);
        }
        if self.input_dir.is_empty() {
            return Err(SessionError::MissingInputDir);
        }
        if self.output_dir.is_empty() {
            return Err(SessionError::MissingOutputDir);
        }
        if self.files.is_empty() {
            return Err(SessionError::NoImages);
        }

        let rect = self.parse_rect()?;
        let job = BatchJob::new(self.files.clone(), rect, self.output_dir.clone());
        self.handle = Some(BatchWorker::spawn(job, engine));
        Ok(())
    }

    /// Drains queued progress events; call from a fixed poll timer.
    ///
    /// When the worker has exited, the handle is joined here and its
    /// outcome is held for [`Session::finish`], so no event queued
    /// between the drain and the thread exit is ever dropped.
    #[must_use]
    pub fn poll(&mut self) -> Vec<ProgressEvent> {
        let Some(handle) = &self.handle else {
            return Vec::new();
        };

        let mut events = handle.drain();
        if handle.is_finished() {
            // The thread has flushed everything it will ever send.
            events.extend(handle.drain());
            if let Some(handle) = self.handle.take() {
                self.last_result = Some(handle.join());
            }
        }
        events
    }

    /// Requests cancellation of the running batch, if any.
    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.cancel();
        }
    }

    /// Takes the outcome of a finished batch, freeing the session for
    /// the next run.
    ///
    /// Returns `None` until a [`Session::poll`] call has observed the
    /// worker exit; otherwise the worker's summary or its fatal
    /// pre-flight error.
    pub fn finish(&mut self) -> Option<anyhow::Result<BatchSummary>> {
        self.last_result.take()
    }
}
