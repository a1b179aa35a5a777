//! Upload request (Value Object)

use super::analysis_type::AnalysisType;
use super::file::UploadFile;

/// One submit of the upload form.
///
/// `file` is `None` when nothing was picked; the request is still sent and
/// the server decides how to reject it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: Option<UploadFile>,
    pub analysis_type: AnalysisType,
}

impl UploadRequest {
    /// Multipart field carrying the file contents.
    pub const FILE_FIELD: &'static str = "file";
    /// Multipart field carrying the analysis type label.
    pub const ANALYSIS_TYPE_FIELD: &'static str = "analysis_type";

    pub fn new(file: Option<UploadFile>, analysis_type: AnalysisType) -> Self {
        Self {
            file,
            analysis_type,
        }
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }
}
