//! Batch Crop Core - Domain types and the crop batch runner.
//!
//! This crate contains the batch domain model (crop rectangle, image
//! references, jobs), the port traits crossed by adapters, the
//! sequential batch runner with per-item failure isolation, and the
//! worker/session plumbing used by interactive front-ends.

pub mod cancel;
pub mod domain;
pub mod error;
pub mod ports;
pub mod runner;
pub mod session;
pub mod worker;

pub use cancel::CancelToken;
pub use domain::{BatchJob, BatchSummary, CropRect, ImageRef};
pub use error::BatchError;
pub use ports::{CropEngine, ProgressEvent, ProgressSink};
pub use runner::run_batch;
pub use session::{Session, SessionError};
pub use worker::{BatchHandle, BatchWorker};
