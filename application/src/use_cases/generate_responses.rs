//! Generate Responses use case
//!
//! Handles a click on the suggestion trigger: collects the negative review
//! texts currently on the page, asks the suggestion endpoint for drafted
//! replies and renders them, or renders the failure in their place.

use crate::ports::feedback_gateway::FeedbackGateway;
use crate::ports::suggestion_view::{SuggestionView, TriggerLabel};
use crate::use_cases::shared::{BusyFlag, RestoreOnDrop};
use feedback_domain::{ReviewTextSet, SuggestionItem};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that prevent a click from running at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateResponsesError {
    #[error("Response generation is already in progress")]
    AlreadyRunning,
}

/// How a click settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// Suggestions were rendered, in server order.
    Rendered(Vec<SuggestionItem>),
    /// The request failed; `message` is what the error block shows.
    Failed { message: String },
}

impl SuggestionOutcome {
    pub fn suggestions(&self) -> &[SuggestionItem] {
        match self {
            SuggestionOutcome::Rendered(items) => items,
            SuggestionOutcome::Failed { .. } => &[],
        }
    }
}

/// Use case for generating response suggestions
pub struct GenerateResponsesUseCase<G: FeedbackGateway + 'static> {
    gateway: Arc<G>,
    busy: BusyFlag,
}

impl<G: FeedbackGateway + 'static> GenerateResponsesUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            busy: BusyFlag::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Run one click against `view`
    ///
    /// Review texts are read from the view on every call. If they cannot be
    /// read, the error block is shown and no request is sent. The trigger is
    /// re-enabled with its default label once the call settles, or when the
    /// returned future is dropped.
    pub async fn execute(
        &self,
        view: &dyn SuggestionView,
    ) -> Result<SuggestionOutcome, GenerateResponsesError> {
        let Some(_guard) = self.busy.try_enter() else {
            debug!("Click ignored: suggestions already in flight");
            return Err(GenerateResponsesError::AlreadyRunning);
        };

        view.set_trigger_enabled(false);
        view.set_trigger_label(TriggerLabel::Busy);
        let _restore = RestoreOnDrop::new(|| {
            view.set_trigger_enabled(true);
            view.set_trigger_label(TriggerLabel::Idle);
        });
        view.show_suggestions_busy();

        let reviews = match view.negative_review_texts() {
            Ok(texts) => ReviewTextSet::new(texts),
            Err(e) => {
                warn!("Could not collect negative reviews: {}", e);
                let message = e.to_string();
                view.show_suggestions_error(&message);
                return Ok(SuggestionOutcome::Failed { message });
            }
        };
        info!("Requesting suggestions for {} negative reviews", reviews.len());

        let outcome = match self.gateway.generate_responses(&reviews).await {
            Ok(items) => {
                info!("Received {} suggestions", items.len());
                view.show_suggestions(&items);
                SuggestionOutcome::Rendered(items)
            }
            Err(e) => {
                warn!("Response generation failed: {}", e);
                let message = e.user_message();
                view.show_suggestions_error(&message);
                SuggestionOutcome::Failed { message }
            }
        };

        Ok(outcome)
    }
}
