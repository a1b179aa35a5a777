//! Suggested responses returned by the suggestion endpoint

use serde::{Deserialize, Serialize};

/// A drafted reply to one negative review.
///
/// Held only long enough to render. `category` is the server's topic guess
/// for the review (for example `delivery` or `service`) and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub original_review: String,
    pub suggested_response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SuggestionItem {
    pub fn new(original_review: impl Into<String>, suggested_response: impl Into<String>) -> Self {
        Self {
            original_review: original_review.into(),
            suggested_response: suggested_response.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Successful body of the suggestion endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggested_responses: Vec<SuggestionItem>,
}
