//! Terminal views
//!
//! Drive the two handlers from the command line: the busy indicator is a
//! spinner, the error alert is a red line on stderr, and navigation prints
//! the results URL.

pub mod suggestion;
pub mod upload;

pub use suggestion::{ReviewSource, TerminalSuggestionView};
pub use upload::TerminalUploadView;
