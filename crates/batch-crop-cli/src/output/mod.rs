//! Output formatting for CLI.

mod console;
mod templates;

pub use console::ConsoleProgress;
pub use templates::MessageTemplates;
