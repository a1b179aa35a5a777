//! Application-level configuration.
//!
//! - [`EndpointConfig`] - request paths for the analysis and suggestion flows

pub mod endpoints;

pub use endpoints::EndpointConfig;
