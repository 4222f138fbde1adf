//! Batch Crop Adapters - External adapters for batch-crop.
//!
//! This crate provides:
//! - Filesystem image enumeration
//! - The `image`-crate crop engine (open, crop with padding, save)

pub mod crop;
pub mod fs;

pub use crop::{crop_canvas, ImageCropEngine};
pub use fs::{enumerate, ExtensionFilter};
