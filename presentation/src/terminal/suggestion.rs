//! Response-suggestion widget rendered in the terminal

use crate::output::console::ConsoleFormatter;
use crate::page::{PageError, ReviewExtractor};
use crate::progress::BusySpinner;
use crate::suggestions::{BUSY_LABEL, BUSY_PLACEHOLDER, IDLE_LABEL};
use colored::Colorize;
use feedback_application::{ReviewReadError, SuggestionView, TriggerLabel};
use feedback_domain::{OutputFormat, SuggestionItem};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, trace};

/// Where the terminal view finds negative reviews
#[derive(Debug, Clone)]
pub enum ReviewSource {
    /// A saved results page, re-read on every click
    Page {
        path: PathBuf,
        extractor: ReviewExtractor,
    },
    /// Review texts given directly
    Texts(Vec<String>),
}

impl ReviewSource {
    /// Saved pages are decoded lossily, so a page that is not UTF-8 still
    /// yields its reviews.
    fn read(&self) -> Result<Vec<String>, PageError> {
        match self {
            ReviewSource::Page { path, extractor } => {
                let bytes = std::fs::read(path).map_err(|e| PageError::ReadPage {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                extractor.extract(&String::from_utf8_lossy(&bytes))
            }
            ReviewSource::Texts(texts) => Ok(texts.clone()),
        }
    }
}

/// Suggestion widget printing to stdout
pub struct TerminalSuggestionView {
    sources: Vec<ReviewSource>,
    format: OutputFormat,
    spinner: BusySpinner,
    rendered: Mutex<Option<String>>,
}

impl TerminalSuggestionView {
    pub fn new(sources: Vec<ReviewSource>, format: OutputFormat) -> Self {
        Self {
            sources,
            format,
            spinner: BusySpinner::new(true),
            rendered: Mutex::new(None),
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.spinner = BusySpinner::new(show_progress);
        self
    }

    /// Last content written to the suggestions area
    pub fn rendered(&self) -> Option<String> {
        self.rendered.lock().ok().and_then(|r| r.clone())
    }

    fn replace(&self, content: String) {
        if let Ok(mut rendered) = self.rendered.lock() {
            *rendered = Some(content);
        }
    }
}

impl SuggestionView for TerminalSuggestionView {
    fn negative_review_texts(&self) -> Result<Vec<String>, ReviewReadError> {
        let mut texts = Vec::new();
        for source in &self.sources {
            texts.extend(source.read()?);
        }
        Ok(texts)
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        trace!("Suggestion trigger enabled: {}", enabled);
    }

    fn set_trigger_label(&self, label: TriggerLabel) {
        let text = match label {
            TriggerLabel::Idle => IDLE_LABEL,
            TriggerLabel::Busy => BUSY_LABEL,
        };
        trace!("Suggestion trigger label: {}", text);
    }

    fn show_suggestions_busy(&self) {
        self.spinner.show(BUSY_PLACEHOLDER);
    }

    fn show_suggestions(&self, suggestions: &[SuggestionItem]) {
        self.spinner.hide();
        let output = ConsoleFormatter::format(suggestions, self.format);
        if output.is_empty() {
            info!("No suggestions returned");
        } else {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        self.replace(output);
    }

    fn show_suggestions_error(&self, message: &str) {
        self.spinner.hide();
        eprintln!("{} {}", "Error:".red().bold(), message);
        self.replace(message.to_string());
    }
}
