//! Console progress adapter, with an optional indicatif bar.

use batch_crop_core::{ProgressEvent, ProgressSink};
use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

use super::MessageTemplates;

/// Progress sink for the headless surface.
///
/// Default mode prints one templated line per processed file plus a
/// final count line; `show_bar` replaces the per-file lines with an
/// indicatif bar (failures still printed through the bar).
pub struct ConsoleProgress {
    bar: Option<IndicatifBar>,
    templates: MessageTemplates,
    quiet: bool,
}

impl ConsoleProgress {
    /// Creates a console sink.
    #[must_use]
    pub fn new(total: u64, quiet: bool, show_bar: bool, templates: MessageTemplates) -> Self {
        if quiet {
            return Self {
                bar: None,
                templates,
                quiet: true,
            };
        }

        let bar = if show_bar {
            let bar = IndicatifBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                bar.set_style(style.progress_chars("#>-"));
            }
            Some(bar)
        } else {
            None
        };

        Self {
            bar,
            templates,
            quiet,
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_event(&self, event: ProgressEvent) {
        if self.quiet {
            return;
        }

        match event {
            ProgressEvent::Started { total } => {
                if let Some(bar) = &self.bar {
                    bar.set_length(total as u64);
                }
            }
            ProgressEvent::ItemSucceeded { file_name, .. } => {
                if let Some(bar) = &self.bar {
                    bar.set_message(file_name);
                    bar.inc(1);
                } else {
                    println!("{}", self.templates.success(&file_name));
                }
            }
            ProgressEvent::ItemFailed {
                file_name, reason, ..
            } => {
                let line = self.templates.failure(&file_name, &reason);
                if let Some(bar) = &self.bar {
                    bar.println(line);
                    bar.inc(1);
                } else {
                    println!("{line}");
                }
            }
            ProgressEvent::Completed { succeeded, total } => {
                let line = self.templates.summary(succeeded, total);
                if let Some(bar) = &self.bar {
                    bar.finish_with_message(line);
                } else {
                    println!();
                    println!("{line}");
                }
            }
        }
    }
}
