//! Upload form view port
//!
//! The upload handler never touches a page directly. It reads and writes
//! the named controls of the upload form through this trait, so the same
//! flow drives a real page, a terminal, or a test double.

use feedback_domain::{AnalysisType, UploadFile};

/// Controls of the upload form
///
/// Methods take `&self`; implementations keep their state behind interior
/// mutability so one view can be shared with a running handler.
pub trait UploadView: Send + Sync {
    /// First entry of the file picker, if any.
    fn selected_file(&self) -> Option<UploadFile>;

    /// Current value of the analysis-type selector.
    fn analysis_type(&self) -> AnalysisType;

    /// Enable or disable the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Show or hide the busy indicator.
    fn set_busy_visible(&self, visible: bool);

    /// Replace the error alert's content with `message` and show it.
    fn show_error(&self, message: &str);

    /// Hide the error alert.
    fn hide_error(&self);

    /// Move the browser to `path`.
    fn navigate(&self, path: &str);
}
