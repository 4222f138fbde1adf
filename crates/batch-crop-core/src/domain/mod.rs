//! Core domain types for batch cropping.

mod image_ref;
mod job;
mod rect;

pub use image_ref::ImageRef;
pub use job::{BatchJob, BatchSummary};
pub use rect::CropRect;
