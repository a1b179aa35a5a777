//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid analysis type: {0:?}")]
    InvalidAnalysisType(String),

    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),
}
