//! The crop batch runner.
//!
//! Applies one crop rectangle to an ordered list of images, isolating
//! per-item failures and reporting progress to a sink. This is the
//! single runner shared by the headless CLI and the worker thread
//! behind an interactive front-end.

use std::fs;

use tracing::{debug, warn};

use crate::cancel::CancelToken;
use crate::domain::{BatchJob, BatchSummary};
use crate::error::BatchError;
use crate::ports::{CropEngine, ProgressEvent, ProgressSink};

/// Runs one batch to completion (or cancellation), strictly in list
/// order.
///
/// The output directory is created (recursively) before the loop.
/// Each item is opened, cropped, and written by `engine`; a failing
/// item is reported via [`ProgressEvent::ItemFailed`] and never aborts
/// the batch. The cancellation token is checked before each item, and
/// exactly one [`ProgressEvent::Completed`] closes the run either way.
///
/// # Errors
///
/// Returns [`BatchError::CreateOutputDir`] when the output directory
/// cannot be created; no item is attempted and no event is emitted in
/// that case.
pub fn run_batch(
    job: &BatchJob,
    engine: &dyn CropEngine,
    progress: &dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<BatchSummary, BatchError> {
    fs::create_dir_all(&job.output_dir).map_err(|source| BatchError::CreateOutputDir {
        path: job.output_dir.clone(),
        source,
    })?;

    let total = job.total();
    debug!("Starting batch: {total} images into {}", job.output_dir.display());
    progress.on_event(ProgressEvent::Started { total });

    let mut succeeded = 0usize;
    let mut cancelled = false;

    for (index, image) in job.images.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!("Batch cancelled before item {index}");
            cancelled = true;
            break;
        }

        // Same filename in the output directory; pre-existing files
        // are silently overwritten.
        let dest = job.output_dir.join(image.file_name());

        match engine.crop_file(image.path(), &dest, job.rect) {
            Ok(()) => {
                succeeded += 1;
                progress.on_event(ProgressEvent::ItemSucceeded {
                    index,
                    file_name: image.file_name().to_owned(),
                });
            }
            Err(e) => {
                warn!("Failed to process {}: {e:#}", image.file_name());
                progress.on_event(ProgressEvent::ItemFailed {
                    index,
                    file_name: image.file_name().to_owned(),
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    progress.on_event(ProgressEvent::Completed { succeeded, total });

    Ok(BatchSummary {
        succeeded,
        total,
        cancelled,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use batch_crop_test_support::{MockCropEngine, MockProgressSink};

    use batch_crop_core::{
        run_batch, BatchError, BatchJob, CancelToken, CropRect, ImageRef, ProgressEvent,
    };

    fn job(names: &[&str]) -> (BatchJob, tempfile::TempDir) {
        let out = tempfile::tempdir().unwrap();
        let images = names
            .iter()
            .map(|n| ImageRef::from_path(format!("/in/{n}")).unwrap())
            .collect();
        let rect = CropRect::new(0, 0, 10, 10).unwrap();
        let job = BatchJob::new(images, rect, out.path().join("cropped"));
        (job, out)
    }

    #[test]
    fn test_all_items_succeed() {
        let (job, _out) = job(&["a.jpg", "b.png"]);
        let engine = MockCropEngine::new();
        let sink = MockProgressSink::new();

        let summary = run_batch(&job, &engine, &sink, &CancelToken::new()).unwrap();

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.total, 2);
        assert!(!summary.cancelled);

        let events = sink.events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], ProgressEvent::Started { total: 2 });
        assert_eq!(
            events[3],
            ProgressEvent::Completed {
                succeeded: 2,
                total: 2
            }
        );
    }

    #[test]
    fn test_failure_is_isolated() {
        let (job, _out) = job(&["a.jpg", "broken.jpg", "c.png"]);
        let engine = MockCropEngine::failing_on(["broken.jpg"]);
        let sink = MockProgressSink::new();

        let summary = run_batch(&job, &engine, &sink, &CancelToken::new()).unwrap();

        // One failure among three never stops the rest.
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(engine.calls().len(), 3);

        let events = sink.events();
        assert!(matches!(
            events[2],
            ProgressEvent::ItemFailed { index: 1, .. }
        ));
        assert!(matches!(
            events[3],
            ProgressEvent::ItemSucceeded { index: 2, .. }
        ));
    }

    #[test]
    fn test_events_follow_list_order() {
        let (job, _out) = job(&["1.jpg", "2.jpg", "3.jpg", "4.jpg"]);
        let engine = MockCropEngine::failing_on(["3.jpg"]);
        let sink = MockProgressSink::new();

        run_batch(&job, &engine, &sink, &CancelToken::new()).unwrap();

        let indices: Vec<usize> = sink
            .events()
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::ItemSucceeded { index, .. }
                | ProgressEvent::ItemFailed { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_event_accounting() {
        // succeeded + failed == total, one Completed, matching counts.
        let (job, _out) = job(&["a.jpg", "b.jpg", "c.jpg"]);
        let engine = MockCropEngine::failing_on(["b.jpg"]);
        let sink = MockProgressSink::new();

        run_batch(&job, &engine, &sink, &CancelToken::new()).unwrap();

        let events = sink.events();
        let succeeded = events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::ItemSucceeded { .. }))
            .count();
        let failed = events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::ItemFailed { .. }))
            .count();
        let completed: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Completed { .. }))
            .collect();

        assert_eq!(succeeded + failed, 3);
        assert_eq!(completed.len(), 1);
        assert_eq!(
            completed[0],
            &ProgressEvent::Completed {
                succeeded: 2,
                total: 3
            }
        );
        assert!(matches!(events.last(), Some(ProgressEvent::Completed { .. })));
    }

    #[test]
    fn test_pre_cancelled_batch_attempts_nothing() {
        let (job, _out) = job(&["a.jpg", "b.jpg"]);
        let engine = MockCropEngine::new();
        let sink = MockProgressSink::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let summary = run_batch(&job, &engine, &sink, &cancel).unwrap();

        assert_eq!(summary.succeeded, 0);
        assert!(summary.cancelled);
        assert!(engine.calls().is_empty());
        // Skipped items are not failures; still exactly one Completed.
        assert_eq!(
            sink.events().last(),
            Some(&ProgressEvent::Completed {
                succeeded: 0,
                total: 2
            })
        );
    }

    #[test]
    fn test_output_dir_failure_is_fatal() {
        let out = tempfile::tempdir().unwrap();
        let blocker = out.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let images = vec![ImageRef::from_path("/in/a.jpg").unwrap()];
        let rect = CropRect::new(0, 0, 10, 10).unwrap();
        let job = BatchJob::new(images, rect, blocker.join("cropped"));

        let engine = MockCropEngine::new();
        let sink = MockProgressSink::new();

        let result = run_batch(&job, &engine, &sink, &CancelToken::new());

        assert!(matches!(result, Err(BatchError::CreateOutputDir { .. })));
        // Fatal pre-flight: no events, no items attempted.
        assert!(sink.events().is_empty());
        assert!(engine.calls().is_empty());
    }
}
