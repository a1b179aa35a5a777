//! Response-suggestion view port

use feedback_domain::SuggestionItem;
use thiserror::Error;

/// Why the negative review texts could not be collected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewReadError {
    /// A negative review element has no text element (1-based position).
    #[error("Negative review #{position} has no review text")]
    MissingText { position: usize },

    /// The page holding the reviews could not be read.
    #[error("Could not read negative reviews: {0}")]
    Unavailable(String),
}

/// Label shown on the suggestion trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerLabel {
    /// Default label, shown whenever no request is in flight.
    #[default]
    Idle,
    /// Shown while a request is in flight.
    Busy,
}

/// Trigger control, suggestions container and negative review elements
pub trait SuggestionView: Send + Sync {
    /// Texts of the negative reviews currently on the page, in document order.
    ///
    /// Must read the live page state on every call. Yields exactly one text
    /// per negative review element, or an error if any of them has none.
    fn negative_review_texts(&self) -> Result<Vec<String>, ReviewReadError>;

    fn set_trigger_enabled(&self, enabled: bool);

    fn set_trigger_label(&self, label: TriggerLabel);

    /// Replace the container's content with the busy placeholder.
    fn show_suggestions_busy(&self);

    /// Replace the container's content with one card per item, in order.
    ///
    /// An empty slice leaves the container empty.
    fn show_suggestions(&self, suggestions: &[SuggestionItem]);

    /// Replace the container's content with a single error block.
    fn show_suggestions_error(&self, message: &str);
}
