//! Negative review texts collected from the page

use serde::{Deserialize, Serialize};

/// Ordered review texts, read from the page at click time.
///
/// Serializes to the suggestion request body
/// `{ "negative_reviews": [...] }`. A set is never cached: every click
/// builds a new one from whatever the page shows at that moment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTextSet {
    negative_reviews: Vec<String>,
}

impl ReviewTextSet {
    pub fn new(reviews: Vec<String>) -> Self {
        Self {
            negative_reviews: reviews,
        }
    }

    pub fn texts(&self) -> &[String] {
        &self.negative_reviews
    }

    pub fn len(&self) -> usize {
        self.negative_reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.negative_reviews.is_empty()
    }
}

impl From<Vec<String>> for ReviewTextSet {
    fn from(reviews: Vec<String>) -> Self {
        Self::new(reviews)
    }
}

impl FromIterator<String> for ReviewTextSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
