//! Upload-and-analyze request values
//!
//! Everything here is transient: an [`UploadRequest`] is built fresh on each
//! submit and dropped once the analysis call settles.

pub mod analysis_type;
pub mod file;
pub mod request;
