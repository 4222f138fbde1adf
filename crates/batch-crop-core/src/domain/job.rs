//! Batch job description and terminal summary.

use std::path::PathBuf;

use super::{CropRect, ImageRef};

/// Everything one runner invocation consumes: the ordered file list,
/// the shared crop rectangle, and the output directory.
///
/// Built once per run and not reused; at most one batch is active per
/// process (enforced by [`crate::Session`]).
#[derive(Debug, Clone)]
pub struct BatchJob {
    /// Ordered list of source images, processed strictly in order.
    pub images: Vec<ImageRef>,
    /// Crop rectangle applied identically to every image.
    pub rect: CropRect,
    /// Directory receiving the cropped files, created before the loop.
    pub output_dir: PathBuf,
}

impl BatchJob {
    /// Creates a new batch job.
    #[must_use]
    pub fn new(images: Vec<ImageRef>, rect: CropRect, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            images,
            rect,
            output_dir: output_dir.into(),
        }
    }

    /// Number of enumerated images.
    #[must_use]
    pub fn total(&self) -> usize {
        self.images.len()
    }
}

/// Terminal counts of one batch run, mirroring the final
/// [`crate::ProgressEvent::Completed`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Items written successfully.
    pub succeeded: usize,
    /// Items enumerated (attempted or not).
    pub total: usize,
    /// Whether the run stopped early on the cancellation token.
    pub cancelled: bool,
}
