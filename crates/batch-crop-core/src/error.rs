//! Fatal batch errors.
//!
//! These are the pre-flight failures that abort a run before any file
//! is touched. Per-item open/crop/save failures are deliberately not
//! represented here: they are caught at the item boundary and reported
//! as [`crate::ProgressEvent::ItemFailed`] events instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error aborting a batch before any item is processed.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Input directory missing or unlistable.
    #[error("cannot read directory {}: {source}", path.display())]
    Directory {
        /// The directory that failed to list.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Non-monotonic crop coordinates.
    #[error("invalid crop rectangle ({left}, {top}, {right}, {bottom}): requires left < right and top < bottom")]
    InvalidRect {
        /// Left edge.
        left: i64,
        /// Top edge.
        top: i64,
        /// Right edge.
        right: i64,
        /// Bottom edge.
        bottom: i64,
    },

    /// Output directory could not be created.
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateOutputDir {
        /// The directory that failed to be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
