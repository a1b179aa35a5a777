//! Error types for building the HTTP adapter

use thiserror::Error;

/// Result type alias for HTTP adapter construction
pub type Result<T> = std::result::Result<T, HttpGatewayError>;

/// Errors that can occur while setting up the HTTP gateway
///
/// Request-time failures are reported as
/// [`GatewayError`](feedback_application::GatewayError) instead.
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid endpoint {path:?}: {reason}")]
    InvalidEndpoint { path: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
