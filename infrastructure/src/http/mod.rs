//! HTTP adapter for the feedback service
//!
//! [`HttpFeedbackGateway`] implements the [`FeedbackGateway`] port with
//! reqwest: a multipart upload to the analysis endpoint and a JSON request
//! to the suggestion endpoint.
//!
//! [`FeedbackGateway`]: feedback_application::FeedbackGateway

pub mod error;
pub mod gateway;

pub use error::HttpGatewayError;
pub use gateway::HttpFeedbackGateway;
