//! Markup for the response-suggestion widget
//!
//! Builds the trigger label, the busy placeholder, the suggestion cards and
//! the error block that replace the suggestions container's content.

use crate::markup::{Element, render_all};
use feedback_application::TriggerLabel;
use feedback_domain::SuggestionItem;

pub const IDLE_LABEL: &str = "Generate Response Suggestions";
pub const BUSY_LABEL: &str = "Generating...";
pub const BUSY_PLACEHOLDER: &str = "Generating response suggestions...";

/// Inner markup of the trigger control for `label`
pub fn trigger_label(label: TriggerLabel) -> String {
    let (icon, text) = match label {
        TriggerLabel::Idle => ("i.fas.fa-robot.me-2", IDLE_LABEL),
        TriggerLabel::Busy => ("i.fas.fa-spinner.fa-spin.me-2", BUSY_LABEL),
    };
    format!("{}{}", Element::new(icon).render(), html_escape::encode_text(text))
}

/// Placeholder shown in the container while a request is in flight
pub fn busy_placeholder() -> String {
    Element::new("div.text-center")
        .append(Element::new("div.spinner-border.text-warning"))
        .append(Element::new("p.mt-2").text(BUSY_PLACEHOLDER))
        .render()
}

/// One card per suggestion, numbered from 1, in input order
///
/// An empty slice renders as an empty string.
pub fn cards(suggestions: &[SuggestionItem]) -> String {
    let cards: Vec<Element> = suggestions
        .iter()
        .enumerate()
        .map(|(index, suggestion)| card(index + 1, suggestion))
        .collect();
    render_all(&cards)
}

fn card(number: usize, suggestion: &SuggestionItem) -> Element {
    let body = Element::new("div.card-body")
        .append(Element::new("h6").text(format!("Review #{}:", number)))
        .append(Element::new("p.text-muted").text(format!("\"{}\"", suggestion.original_review)))
        .append(
            Element::new("div.bg-light.p-3.rounded")
                .append(Element::new("strong").text("Suggested Response:"))
                .append(Element::new("p.mb-0").text(&suggestion.suggested_response)),
        );

    Element::new("div.card.mb-3").append(body)
}

/// Inline error block replacing the container's content
pub fn error_block(message: &str) -> String {
    Element::new("div.alert.alert-danger").text(message).render()
}
