//! CLI command definitions and handlers.

pub mod crop;

use clap::Parser;

/// Batch Crop - crop a directory of images to one shared rectangle
#[derive(Parser)]
#[command(name = "batch-crop")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Crop arguments (directories, rectangle, extensions, flags).
    #[command(flatten)]
    pub crop: crop::CropArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The batch ran to completion, item failures included.
    Success,
    /// A fatal pre-flight error aborted before any file was touched.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::SUCCESS,
            ExitCode::Error => Self::FAILURE,
        }
    }
}
