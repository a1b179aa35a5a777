//! Presentation layer for feedback-client
//!
//! This crate contains the page model and markup rendering for the two
//! flows, terminal views and output formatters, and CLI definitions.

pub mod cli;
pub mod markup;
pub mod output;
pub mod page;
pub mod progress;
pub mod suggestions;
pub mod terminal;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use page::{PageDocument, PageError, PageState, ReviewExtractor};
pub use progress::BusySpinner;
pub use terminal::{ReviewSource, TerminalSuggestionView, TerminalUploadView};
