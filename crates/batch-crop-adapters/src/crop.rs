//! Crop engine backed by the `image` crate.

use std::path::Path;

use anyhow::{Context, Result};
use batch_crop_core::{CropEngine, CropRect};
use image::{imageops, DynamicImage, GenericImageView, RgbaImage};
use tracing::trace;

/// Crops `source` to `rect`, padding any out-of-bounds region.
///
/// The result is always `rect.width() x rect.height()`. The part of
/// the rectangle overlapping the source is copied at its offset; the
/// rest stays zero-initialized RGBA, i.e. transparent where the target
/// codec keeps alpha and black where it is dropped at save time. A
/// rectangle entirely outside the source yields a fully padded image,
/// never an error.
///
/// # Errors
///
/// Fails only when the rectangle is too large to represent as image
/// dimensions.
pub fn crop_canvas(source: &DynamicImage, rect: CropRect) -> Result<RgbaImage> {
    let width = u32::try_from(rect.width()).context("crop rectangle too wide")?;
    let height = u32::try_from(rect.height()).context("crop rectangle too tall")?;

    let mut canvas = RgbaImage::new(width, height);

    let src_width = i64::from(source.width());
    let src_height = i64::from(source.height());

    // Intersection of the rectangle and the source image.
    let x0 = rect.left().max(0);
    let y0 = rect.top().max(0);
    let x1 = rect.right().min(src_width);
    let y1 = rect.bottom().min(src_height);

    if x0 < x1 && y0 < y1 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let overlap = source
            .crop_imm(x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32)
            .to_rgba8();
        imageops::replace(&mut canvas, &overlap, x0 - rect.left(), y0 - rect.top());
    } else {
        trace!("Crop rectangle entirely outside source bounds");
    }

    Ok(canvas)
}

/// [`CropEngine`] implementation doing real open/crop/save work.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCropEngine;

impl ImageCropEngine {
    /// Creates the engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CropEngine for ImageCropEngine {
    fn crop_file(&self, source: &Path, dest: &Path, rect: CropRect) -> Result<()> {
        let img = image::open(source)
            .with_context(|| format!("Failed to open image: {}", source.display()))?;

        let canvas = crop_canvas(&img, rect)?;

        // The destination extension picks the codec; alpha-less codecs
        // get an RGB conversion so padding lands as black.
        let ext = dest
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let out = match ext.as_str() {
            "jpg" | "jpeg" | "bmp" => DynamicImage::ImageRgb8(
                DynamicImage::ImageRgba8(canvas).to_rgb8(),
            ),
            _ => DynamicImage::ImageRgba8(canvas),
        };

        out.save(dest)
            .with_context(|| format!("Failed to save image: {}", dest.display()))?;
        Ok(())
    }
}
