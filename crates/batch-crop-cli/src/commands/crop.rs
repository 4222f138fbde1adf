//! Crop command - run one batch over a directory.

use std::path::PathBuf;

use anyhow::Result;
use batch_crop_adapters::{enumerate, ExtensionFilter, ImageCropEngine};
use batch_crop_core::{run_batch, BatchJob, BatchSummary, CancelToken, CropRect};
use clap::Args;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::output::{ConsoleProgress, MessageTemplates};

/// Arguments for one batch crop run.
#[derive(Args, Clone)]
pub struct CropArgs {
    /// Directory containing the source images
    pub input_dir: PathBuf,

    /// Directory receiving the cropped images (created if absent)
    pub output_dir: PathBuf,

    /// Left edge of the crop rectangle
    #[arg(long, allow_negative_numbers = true)]
    pub left: i64,

    /// Top edge of the crop rectangle
    #[arg(long, allow_negative_numbers = true)]
    pub top: i64,

    /// Right edge of the crop rectangle
    #[arg(long, allow_negative_numbers = true)]
    pub right: i64,

    /// Bottom edge of the crop rectangle
    #[arg(long, allow_negative_numbers = true)]
    pub bottom: i64,

    /// File extensions to process (default: .jpg .jpeg .png)
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub extensions: Option<Vec<String>>,

    /// Show a progress bar instead of per-file lines
    #[arg(long)]
    pub progress: bool,

    /// Suppress per-file output
    #[arg(short, long)]
    pub quiet: bool,

    /// Merged config (populated by `with_config`, not from CLI).
    #[arg(skip)]
    config: Option<AppConfig>,
}

impl CropArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (headless extension set, stock messages)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if args.extensions.is_none() {
            args.extensions.clone_from(&config.general.extensions);
        }
        if !args.progress {
            args.progress = config.general.progress.unwrap_or(false);
        }
        if !args.quiet {
            args.quiet = config.general.quiet.unwrap_or(false);
        }
        args.config = Some(config.clone());
        args
    }

    fn filter(&self) -> ExtensionFilter {
        self.extensions
            .as_ref()
            .map_or_else(ExtensionFilter::headless, ExtensionFilter::new)
    }

    fn templates(&self) -> MessageTemplates {
        self.config
            .as_ref()
            .map_or_else(MessageTemplates::default, |c| {
                MessageTemplates::from_config(&c.messages)
            })
    }
}

/// Runs the batch synchronously to completion.
///
/// Rectangle and directory validation happen up front and are the only
/// fatal class; per-item failures are reported inline and never abort
/// the run.
///
/// # Errors
///
/// Returns an error for an invalid rectangle, an unreadable input
/// directory, or an output directory that cannot be created; all are
/// checked before any file is touched.
pub fn run(args: &CropArgs) -> Result<BatchSummary> {
    // Validated before any file I/O.
    let rect = CropRect::new(args.left, args.top, args.right, args.bottom)?;

    let images = enumerate(&args.input_dir, &args.filter())?;
    info!("Enumerated {} images in {}", images.len(), args.input_dir.display());

    if same_directory(&args.input_dir, &args.output_dir) {
        // Documented caller responsibility: outputs overwrite sources.
        warn!(
            "Input and output directory are the same; sources in {} will be overwritten",
            args.input_dir.display()
        );
    }

    let total = images.len();
    let job = BatchJob::new(images, rect, args.output_dir.clone());
    let progress = ConsoleProgress::new(total as u64, args.quiet, args.progress, args.templates());

    let summary = run_batch(&job, &ImageCropEngine::new(), &progress, &CancelToken::new())?;
    debug!(
        "Batch finished: {}/{} succeeded",
        summary.succeeded, summary.total
    );
    Ok(summary)
}

/// Whether two paths name the same directory, resolving symlinks when
/// both exist.
fn same_directory(a: &std::path::Path, b: &std::path::Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
