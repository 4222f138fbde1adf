//! Filesystem image enumeration.

use std::collections::BTreeSet;
use std::path::Path;

use batch_crop_core::{BatchError, ImageRef};
use tracing::debug;

/// Extensions recognized by the headless surface.
const HEADLESS_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
/// Extensions recognized by the interactive surface. The two surfaces
/// intentionally differ; this preserves that divergence as
/// configuration rather than unifying it.
const INTERACTIVE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Case-insensitive set of recognized file-extension suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Builds a filter from extension strings, with or without a
    /// leading dot, matched case-insensitively.
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    /// Default set for the headless command: `.jpg .jpeg .png`.
    #[must_use]
    pub fn headless() -> Self {
        Self::new(HEADLESS_EXTENSIONS.iter().copied())
    }

    /// Default set for interactive use: `.jpg .jpeg .png .bmp .gif`.
    #[must_use]
    pub fn interactive() -> Self {
        Self::new(INTERACTIVE_EXTENSIONS.iter().copied())
    }

    /// Whether a path's extension (lower-cased) is in the set.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .is_some_and(|e| self.extensions.contains(&e))
    }
}

/// Scans one directory for recognized image files.
///
/// Entries are yielded in the order the underlying directory listing
/// returns them: implementation-defined, but stable within a single
/// listing call. Subdirectories are not entered.
///
/// # Errors
///
/// Returns [`BatchError::Directory`] when the directory does not exist
/// or cannot be listed.
pub fn enumerate(dir: &Path, filter: &ExtensionFilter) -> Result<Vec<ImageRef>, BatchError> {
    let entries = std::fs::read_dir(dir).map_err(|source| BatchError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() && filter.matches(&path) {
            if let Some(image) = ImageRef::from_path(path) {
                images.push(image);
            }
        }
    }

    debug!("Found {} image files in {}", images.len(), dir.display());
    Ok(images)
}
