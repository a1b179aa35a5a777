//! Feedback Gateway port
//!
//! Defines the interface for talking to the feedback service.

use async_trait::async_trait;
use feedback_domain::{ReviewTextSet, SuggestionItem, UploadRequest};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is the body's `error` field, or the flow's fallback text.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never completed (connection refused, DNS, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// A 2xx response whose body could not be decoded.
    #[error("{0}")]
    InvalidResponse(String),

    /// The request could not be built, so nothing was sent.
    #[error("{0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// Text shown to the user in the inline error element.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Gateway to the feedback service
///
/// This port defines how the application layer reaches the analysis and
/// suggestion endpoints. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait FeedbackGateway: Send + Sync {
    /// Upload a file for analysis. Only the success signal matters.
    async fn analyze(&self, request: &UploadRequest) -> Result<(), GatewayError>;

    /// Ask for drafted replies to the given negative reviews.
    async fn generate_responses(
        &self,
        reviews: &ReviewTextSet,
    ) -> Result<Vec<SuggestionItem>, GatewayError>;
}
