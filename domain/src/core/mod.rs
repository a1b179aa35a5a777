//! Core domain concepts shared across the upload and suggestion flows.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`error_body::ErrorBody`] - the `{ "error": ... }` body returned on failure

pub mod error;
pub mod error_body;
