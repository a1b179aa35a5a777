//! Console output formatter for drafted responses

use crate::output::formatter::OutputFormatter;
use crate::suggestions;
use colored::Colorize;
use feedback_domain::{OutputFormat, SuggestionItem};

/// Formats suggestions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format in the requested output format
    pub fn format(suggestions: &[SuggestionItem], format: OutputFormat) -> String {
        match format {
            OutputFormat::Cards => Self::format_cards(suggestions),
            OutputFormat::Html => Self::format_html(suggestions),
            OutputFormat::Json => Self::format_json(suggestions),
        }
    }

    /// One block per suggestion, numbered from 1
    ///
    /// An empty slice renders as an empty string, like the page's empty
    /// suggestions container.
    pub fn format_cards(suggestions: &[SuggestionItem]) -> String {
        if suggestions.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        output.push_str(&Self::header("Response Suggestions"));
        output.push('\n');

        for (index, suggestion) in suggestions.iter().enumerate() {
            let title = format!("── Review #{}: ──", index + 1);
            match &suggestion.category {
                Some(category) => output.push_str(&format!(
                    "\n{} {}\n",
                    title.yellow().bold(),
                    format!("[{}]", category).dimmed()
                )),
                None => output.push_str(&format!("\n{}\n", title.yellow().bold())),
            }
            output.push_str(&format!(
                "{}\n",
                Self::indent(&format!("\"{}\"", suggestion.original_review), "  ").dimmed()
            ));
            output.push_str(&format!("  {}\n", "Suggested Response:".cyan().bold()));
            output.push_str(&Self::indent(&suggestion.suggested_response, "  "));
            output.push('\n');
        }

        output
    }

    /// The escaped card markup, as the page would receive it
    pub fn format_html(suggestions: &[SuggestionItem]) -> String {
        suggestions::cards(suggestions)
    }

    /// Format as JSON
    pub fn format_json(suggestions: &[SuggestionItem]) -> String {
        serde_json::to_string_pretty(suggestions).unwrap_or_else(|_| "[]".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_cards(&self, suggestions: &[SuggestionItem]) -> String {
        Self::format_cards(suggestions)
    }

    fn format_html(&self, suggestions: &[SuggestionItem]) -> String {
        Self::format_html(suggestions)
    }

    fn format_json(&self, suggestions: &[SuggestionItem]) -> String {
        Self::format_json(suggestions)
    }
}
