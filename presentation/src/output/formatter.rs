//! Output formatter trait

use feedback_domain::SuggestionItem;

/// Trait for formatting drafted responses
pub trait OutputFormatter {
    /// Readable cards for the terminal
    fn format_cards(&self, suggestions: &[SuggestionItem]) -> String;

    /// The markup injected into the suggestions container
    fn format_html(&self, suggestions: &[SuggestionItem]) -> String;

    /// Format as JSON
    fn format_json(&self, suggestions: &[SuggestionItem]) -> String;
}
