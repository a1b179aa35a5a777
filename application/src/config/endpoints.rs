//! Endpoint paths used by the two flows.

use serde::{Deserialize, Serialize};

/// Paths of the feedback service, relative to its base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Accepts the multipart upload.
    pub analyze: String,
    /// Page the browser navigates to once an analysis is accepted.
    pub results: String,
    /// Accepts negative review texts and returns drafted replies.
    pub generate_responses: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            analyze: "/analyze".to_string(),
            results: "/results".to_string(),
            generate_responses: "/generate-responses".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn with_results(mut self, path: impl Into<String>) -> Self {
        self.results = path.into();
        self
    }

    /// Every configured path, paired with its key, for validation.
    pub fn paths(&self) -> [(&'static str, &str); 3] {
        [
            ("endpoints.analyze", self.analyze.as_str()),
            ("endpoints.results", self.results.as_str()),
            ("endpoints.generate_responses", self.generate_responses.as_str()),
        ]
    }
}
