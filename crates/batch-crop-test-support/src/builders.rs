//! Synthetic image builders for testing.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba, RgbaImage};

/// Builder for creating synthetic test images and fixture files.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    /// Creates a uniform RGB image.
    #[must_use]
    pub fn solid(width: u32, height: u32, r: u8, g: u8, b: u8) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |_, _| Rgba([r, g, b, 255]));
        DynamicImage::ImageRgba8(img)
    }

    /// Creates an image with a red left half and a blue right half,
    /// so crop offsets are visible in pixel values.
    #[must_use]
    pub fn two_tone(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    /// Creates a horizontal brightness gradient.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            let v = ((u32::from(u8::MAX) * x) / width.max(1)) as u8;
            Rgba([v, v, v, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    /// Writes an image into `dir` under `name`, picking the codec from
    /// the extension, and returns the written path.
    ///
    /// # Panics
    ///
    /// Panics on I/O or encoding failure; fixtures are test-only.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn write(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
        let path = dir.join(name);
        // JPEG rejects RGBA buffers.
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if matches!(ext.as_str(), "jpg" | "jpeg" | "bmp") {
            DynamicImage::ImageRgb8(img.to_rgb8())
                .save(&path)
                .expect("write fixture image");
        } else {
            img.save(&path).expect("write fixture image");
        }
        path
    }

    /// Writes a file with an image extension but unreadable contents.
    ///
    /// # Panics
    ///
    /// Panics on I/O failure; fixtures are test-only.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"this is not an image").expect("write corrupt fixture");
        path
    }
}
