//! Submit Upload use case
//!
//! Handles a submit of the upload form: sends the selected file and analysis
//! type to the analysis endpoint, then either navigates to the results page
//! or shows the failure in the form's error alert.

use crate::config::EndpointConfig;
use crate::ports::feedback_gateway::FeedbackGateway;
use crate::ports::upload_view::UploadView;
use crate::use_cases::shared::{BusyFlag, RestoreOnDrop};
use feedback_domain::UploadRequest;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that prevent a submit from running at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitUploadError {
    #[error("An upload is already in progress")]
    AlreadyRunning,
}

/// How a submit settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The server accepted the upload; the view was sent to `location`.
    Accepted { location: String },
    /// The upload failed; `message` is what the error alert shows.
    Rejected { message: String },
}

impl UploadOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, UploadOutcome::Accepted { .. })
    }
}

/// Use case for submitting the upload form
pub struct SubmitUploadUseCase<G: FeedbackGateway + 'static> {
    gateway: Arc<G>,
    endpoints: EndpointConfig,
    busy: BusyFlag,
}

impl<G: FeedbackGateway + 'static> SubmitUploadUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            endpoints: EndpointConfig::default(),
            busy: BusyFlag::new(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: EndpointConfig) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Whether a submit is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Run one submit against `view`
    ///
    /// The submit control is re-enabled and the busy indicator hidden once
    /// the call settles, whatever the outcome. That also happens if the
    /// returned future is dropped before it completes.
    pub async fn execute(
        &self,
        view: &dyn UploadView,
    ) -> Result<UploadOutcome, SubmitUploadError> {
        let Some(_guard) = self.busy.try_enter() else {
            debug!("Submit ignored: upload already in flight");
            return Err(SubmitUploadError::AlreadyRunning);
        };

        view.set_submit_enabled(false);
        view.set_busy_visible(true);
        // Dropped before `_guard`, so the controls are back before the flag clears
        let _restore = RestoreOnDrop::new(|| {
            view.set_submit_enabled(true);
            view.set_busy_visible(false);
        });
        view.hide_error();

        let request = UploadRequest::new(view.selected_file(), view.analysis_type());
        match &request.file {
            Some(file) => info!(
                "Uploading {} ({} bytes) for {} analysis",
                file.file_name(),
                file.len(),
                request.analysis_type
            ),
            None => info!(
                "Submitting {} analysis without a file",
                request.analysis_type
            ),
        }

        let outcome = match self.gateway.analyze(&request).await {
            Ok(()) => {
                info!("Analysis accepted, navigating to {}", self.endpoints.results);
                view.navigate(&self.endpoints.results);
                UploadOutcome::Accepted {
                    location: self.endpoints.results.clone(),
                }
            }
            Err(e) => {
                warn!("Analysis failed: {}", e);
                let message = e.user_message();
                view.show_error(&message);
                UploadOutcome::Rejected { message }
            }
        };

        Ok(outcome)
    }
}
