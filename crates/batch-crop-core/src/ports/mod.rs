//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the batch runner and
//! external adapters (codec work, progress observers).

mod crop_engine;
mod progress;

pub use crop_engine::CropEngine;
pub use progress::{ProgressEvent, ProgressSink};
