//! Progress reporting port for console and UI integration.

/// Events emitted by the batch runner as work proceeds.
///
/// Events for item *i* are emitted before events for item *i+1* (the
/// runner processes its list strictly sequentially), no item produces
/// more than one event, and exactly one `Completed` closes every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The batch started.
    Started {
        /// Total enumerated images in the batch.
        total: usize,
    },
    /// One image was cropped and written.
    ItemSucceeded {
        /// Index in the batch (0-based).
        index: usize,
        /// Base filename of the image.
        file_name: String,
    },
    /// One image failed to open, crop, or save; the batch continues.
    ItemFailed {
        /// Index in the batch (0-based).
        index: usize,
        /// Base filename of the image.
        file_name: String,
        /// Rendered error chain.
        reason: String,
    },
    /// The batch finished, whether completed fully or cancelled.
    Completed {
        /// Images written successfully.
        succeeded: usize,
        /// Images enumerated.
        total: usize,
    },
}

/// Port for receiving progress events.
///
/// Implementations must not block the runner for more than a bounded
/// time; queue-backed sinks should enqueue and return.
pub trait ProgressSink: Send + Sync {
    /// Called once per progress event, in emission order.
    fn on_event(&self, event: ProgressEvent);
}
