//! Domain layer for feedback-client
//!
//! This crate contains the transient values exchanged with the feedback
//! service. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Upload request**: one selected file plus an analysis-type label,
//!   sent to the analysis endpoint
//! - **Review text set**: the negative review texts shown on the page,
//!   sent to the suggestion endpoint
//! - **Suggestion item**: an original review paired with a drafted reply

pub mod config;
pub mod core;
pub mod review;
pub mod suggestion;
pub mod upload;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    error_body::{ANALYSIS_FAILED, ErrorBody, RESPONSES_FAILED},
};
pub use review::ReviewTextSet;
pub use suggestion::{SuggestionItem, SuggestionsResponse};
pub use upload::{analysis_type::AnalysisType, file::UploadFile, request::UploadRequest};
