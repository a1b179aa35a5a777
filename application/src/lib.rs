//! Application layer for feedback-client
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EndpointConfig;
pub use ports::{
    feedback_gateway::{FeedbackGateway, GatewayError},
    suggestion_view::{ReviewReadError, SuggestionView, TriggerLabel},
    upload_view::UploadView,
};
pub use use_cases::generate_responses::{
    GenerateResponsesError, GenerateResponsesUseCase, SuggestionOutcome,
};
pub use use_cases::submit_upload::{SubmitUploadError, SubmitUploadUseCase, UploadOutcome};
