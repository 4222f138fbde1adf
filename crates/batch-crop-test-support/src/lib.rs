//! Test support utilities for batch-crop.
//!
//! Provides mocks for the core port traits and synthetic image
//! builders for exercising the crop pipeline.
//!
//! # Example
//!
//! ```
//! use batch_crop_test_support::{MockProgressSink, SyntheticImageBuilder};
//!
//! let sink = MockProgressSink::new();
//! let img = SyntheticImageBuilder::two_tone(200, 200).to_rgba8();
//! assert_eq!(img.dimensions(), (200, 200));
//! assert_eq!(sink.events().len(), 0);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{CropCall, MockCropEngine, MockProgressSink};
