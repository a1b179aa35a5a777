//! Negative review extraction from results markup

use feedback_application::ReviewReadError;
use scraper::{Html, Selector};
use std::path::PathBuf;
use thiserror::Error;

/// Default marker of a negative review element
pub const NEGATIVE_REVIEW_SELECTOR: &str = ".border-danger";
/// Default text element nested in a negative review
pub const REVIEW_TEXT_SELECTOR: &str = "p";

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A negative review element without a text element (1-based position)
    #[error("Negative review #{position} has no review text")]
    MissingReviewText { position: usize },

    #[error("Failed to read page {}: {reason}", .path.display())]
    ReadPage { path: PathBuf, reason: String },
}

impl From<PageError> for ReviewReadError {
    fn from(error: PageError) -> Self {
        match error {
            PageError::MissingReviewText { position } => ReviewReadError::MissingText { position },
            other => ReviewReadError::Unavailable(other.to_string()),
        }
    }
}

/// Reads review texts out of page markup with two CSS selectors
#[derive(Debug, Clone)]
pub struct ReviewExtractor {
    review: Selector,
    text: Selector,
}

impl ReviewExtractor {
    pub fn new(review_selector: &str, text_selector: &str) -> Result<Self, PageError> {
        Ok(Self {
            review: Self::parse(review_selector)?,
            text: Self::parse(text_selector)?,
        })
    }

    /// Extractor for the feedback page's own markup
    pub fn standard() -> Result<Self, PageError> {
        Self::new(NEGATIVE_REVIEW_SELECTOR, REVIEW_TEXT_SELECTOR)
    }

    fn parse(selector: &str) -> Result<Selector, PageError> {
        Selector::parse(selector).map_err(|e| PageError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })
    }

    /// Text of the first text element inside each review element, in
    /// document order
    ///
    /// The text is taken as-is, like `textContent`. One text per review
    /// element: a review element without a text element fails the whole
    /// extraction.
    pub fn extract(&self, markup: &str) -> Result<Vec<String>, PageError> {
        let document = Html::parse_document(markup);

        document
            .select(&self.review)
            .enumerate()
            .map(|(index, review)| {
                review
                    .select(&self.text)
                    .next()
                    .map(|text| text.text().collect::<String>())
                    .ok_or(PageError::MissingReviewText { position: index + 1 })
            })
            .collect()
    }
}
