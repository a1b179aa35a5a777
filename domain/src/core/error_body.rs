//! Failure body shared by both endpoints

use serde::{Deserialize, Serialize};

/// Shown when an analysis request fails without a server-provided message.
pub const ANALYSIS_FAILED: &str = "Analysis failed";

/// Shown when response generation fails without a server-provided message.
pub const RESPONSES_FAILED: &str = "Failed to generate responses";

/// JSON body the server sends alongside a non-2xx status.
///
/// The `error` field is optional; callers fall back to a flow-specific
/// message when it is missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }

    /// Decode a failure body, treating anything that is not a JSON object
    /// with a string `error` field as "no message".
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// The server message, or `fallback` when absent or empty.
    ///
    /// A whitespace-only message is still the server's message.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.error.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => fallback.to_string(),
        }
    }
}
