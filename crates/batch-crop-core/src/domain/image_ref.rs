//! References to enumerated source images.

use std::path::{Path, PathBuf};

/// One enumerated source image: its path plus the base filename used
/// to name the output file identically.
///
/// Immutable once enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    path: PathBuf,
    file_name: String,
}

impl ImageRef {
    /// Creates a reference from a path, or `None` when the path has no
    /// representable filename component.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let file_name = path.file_name()?.to_str()?.to_owned();
        Some(Self { path, file_name })
    }

    /// Full path to the source file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base filename, extension included.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
