//! Crop engine port: the runner's only view of codec work.

use std::path::Path;

use crate::domain::CropRect;

/// Port for opening a source image, applying the crop, and writing the
/// result.
///
/// The output codec is implied by the destination filename's
/// extension; since destination filenames equal source filenames, the
/// source codec is preserved.
pub trait CropEngine: Send + Sync {
    /// Crops `source` to `rect` and writes the result to `dest`,
    /// overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error when the source cannot be decoded or the
    /// destination cannot be written. Errors are isolated to the item
    /// by the runner and never abort the batch.
    fn crop_file(&self, source: &Path, dest: &Path, rect: CropRect) -> anyhow::Result<()>;
}
