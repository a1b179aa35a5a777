//! Upload form rendered in the terminal

use crate::progress::BusySpinner;
use colored::Colorize;
use feedback_application::UploadView;
use feedback_domain::{AnalysisType, UploadFile};
use std::sync::Mutex;
use tracing::trace;

/// Upload form backed by command-line arguments
pub struct TerminalUploadView {
    file: Option<UploadFile>,
    analysis_type: AnalysisType,
    base_url: String,
    spinner: BusySpinner,
    error: Mutex<Option<String>>,
    location: Mutex<Option<String>>,
}

impl TerminalUploadView {
    pub fn new(file: Option<UploadFile>, analysis_type: AnalysisType) -> Self {
        Self {
            file,
            analysis_type,
            base_url: String::new(),
            spinner: BusySpinner::new(true),
            error: Mutex::new(None),
            location: Mutex::new(None),
        }
    }

    /// Prefix printed before the results path on navigation
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.spinner = BusySpinner::new(show_progress);
        self
    }

    /// Error currently shown, if any
    pub fn error(&self) -> Option<String> {
        self.error.lock().ok().and_then(|e| e.clone())
    }

    /// Where the last successful submit navigated to
    pub fn location(&self) -> Option<String> {
        self.location.lock().ok().and_then(|l| l.clone())
    }

    fn busy_message(&self) -> String {
        match &self.file {
            Some(file) => format!("Analyzing {}...", file.file_name()),
            None => "Analyzing...".to_string(),
        }
    }
}

impl UploadView for TerminalUploadView {
    fn selected_file(&self) -> Option<UploadFile> {
        self.file.clone()
    }

    fn analysis_type(&self) -> AnalysisType {
        self.analysis_type.clone()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        trace!("Submit control enabled: {}", enabled);
    }

    fn set_busy_visible(&self, visible: bool) {
        if visible {
            self.spinner.show(self.busy_message());
        } else {
            self.spinner.hide();
        }
    }

    fn show_error(&self, message: &str) {
        if let Ok(mut error) = self.error.lock() {
            *error = Some(message.to_string());
        }
        self.spinner
            .suspend(|| eprintln!("{} {}", "Error:".red().bold(), message));
    }

    fn hide_error(&self) {
        if let Ok(mut error) = self.error.lock() {
            *error = None;
        }
    }

    fn navigate(&self, path: &str) {
        if let Ok(mut location) = self.location.lock() {
            *location = Some(path.to_string());
        }
        let url = format!("{}{}", self.base_url, path);
        self.spinner.suspend(|| {
            println!("{} {}", "Analysis complete. Results:".green().bold(), url)
        });
    }
}
