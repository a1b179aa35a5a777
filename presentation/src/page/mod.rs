//! In-memory page model
//!
//! [`PageDocument`] stands in for the rendered feedback page: it holds the
//! state of every control the two handlers touch, plus the results markup
//! from which negative reviews are read.

pub mod document;
pub mod reviews;

pub use document::{AlertState, PageDocument, PageState};
pub use reviews::{PageError, ReviewExtractor};
