//! Test doubles for the gateway and view ports.

use crate::ports::feedback_gateway::{FeedbackGateway, GatewayError};
use crate::ports::suggestion_view::{ReviewReadError, SuggestionView, TriggerLabel};
use crate::ports::upload_view::UploadView;
use async_trait::async_trait;
use feedback_domain::{AnalysisType, ReviewTextSet, SuggestionItem, UploadFile, UploadRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// A scripted gateway reply
#[derive(Debug, Clone)]
pub(crate) enum ScriptedReply {
    Accepted,
    Suggestions(Vec<SuggestionItem>),
    Error(GatewayError),
}

/// Mock gateway returning scripted replies in order and recording requests
pub(crate) struct ScriptedGateway {
    replies: Mutex<VecDeque<ScriptedReply>>,
    /// When set, every call waits for a permit before replying
    gate: Option<Arc<Notify>>,
    pub(crate) uploads: Mutex<Vec<UploadRequest>>,
    pub(crate) review_sets: Mutex<Vec<ReviewTextSet>>,
}

impl ScriptedGateway {
    pub(crate) fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            gate: None,
            uploads: Mutex::new(Vec::new()),
            review_sets: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn gated(replies: Vec<ScriptedReply>, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(replies)
        }
    }

    async fn next_reply(&self) -> ScriptedReply {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ScriptedReply::Error(GatewayError::Transport(
                "(no more replies)".to_string(),
            )))
    }
}

#[async_trait]
impl FeedbackGateway for ScriptedGateway {
    async fn analyze(&self, request: &UploadRequest) -> Result<(), GatewayError> {
        self.uploads.lock().unwrap().push(request.clone());
        match self.next_reply().await {
            ScriptedReply::Error(e) => Err(e),
            _ => Ok(()),
        }
    }

    async fn generate_responses(
        &self,
        reviews: &ReviewTextSet,
    ) -> Result<Vec<SuggestionItem>, GatewayError> {
        self.review_sets.lock().unwrap().push(reviews.clone());
        match self.next_reply().await {
            ScriptedReply::Suggestions(items) => Ok(items),
            ScriptedReply::Accepted => Ok(Vec::new()),
            ScriptedReply::Error(e) => Err(e),
        }
    }
}

/// Everything a handler did to a view, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewEvent {
    SubmitEnabled(bool),
    BusyVisible(bool),
    ErrorShown(String),
    ErrorHidden,
    Navigated(String),
    TriggerEnabled(bool),
    TriggerLabel(TriggerLabel),
    SuggestionsBusy,
    SuggestionsShown(usize),
    SuggestionsError(String),
}

/// Upload view that records every call
pub(crate) struct RecordingUploadView {
    file: Option<UploadFile>,
    analysis_type: AnalysisType,
    pub(crate) events: Mutex<Vec<ViewEvent>>,
}

impl RecordingUploadView {
    pub(crate) fn new(file: Option<UploadFile>, analysis_type: AnalysisType) -> Self {
        Self {
            file,
            analysis_type,
            events: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl UploadView for RecordingUploadView {
    fn selected_file(&self) -> Option<UploadFile> {
        self.file.clone()
    }

    fn analysis_type(&self) -> AnalysisType {
        self.analysis_type.clone()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.record(ViewEvent::SubmitEnabled(enabled));
    }

    fn set_busy_visible(&self, visible: bool) {
        self.record(ViewEvent::BusyVisible(visible));
    }

    fn show_error(&self, message: &str) {
        self.record(ViewEvent::ErrorShown(message.to_string()));
    }

    fn hide_error(&self) {
        self.record(ViewEvent::ErrorHidden);
    }

    fn navigate(&self, path: &str) {
        self.record(ViewEvent::Navigated(path.to_string()));
    }
}

/// Suggestion view whose review texts can change between clicks
pub(crate) struct RecordingSuggestionView {
    reviews: Mutex<Result<Vec<String>, ReviewReadError>>,
    pub(crate) rendered: Mutex<Vec<SuggestionItem>>,
    pub(crate) events: Mutex<Vec<ViewEvent>>,
}

impl RecordingSuggestionView {
    pub(crate) fn new(reviews: &[&str]) -> Self {
        Self {
            reviews: Mutex::new(Ok(reviews.iter().map(|r| r.to_string()).collect())),
            rendered: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn set_reviews(&self, reviews: &[&str]) {
        *self.reviews.lock().unwrap() = Ok(reviews.iter().map(|r| r.to_string()).collect());
    }

    /// Make every later read of the review texts fail with `error`
    pub(crate) fn fail_reviews(&self, error: ReviewReadError) {
        *self.reviews.lock().unwrap() = Err(error);
    }

    pub(crate) fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl SuggestionView for RecordingSuggestionView {
    fn negative_review_texts(&self) -> Result<Vec<String>, ReviewReadError> {
        self.reviews.lock().unwrap().clone()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.record(ViewEvent::TriggerEnabled(enabled));
    }

    fn set_trigger_label(&self, label: TriggerLabel) {
        self.record(ViewEvent::TriggerLabel(label));
    }

    fn show_suggestions_busy(&self) {
        self.record(ViewEvent::SuggestionsBusy);
    }

    fn show_suggestions(&self, suggestions: &[SuggestionItem]) {
        *self.rendered.lock().unwrap() = suggestions.to_vec();
        self.record(ViewEvent::SuggestionsShown(suggestions.len()));
    }

    fn show_suggestions_error(&self, message: &str) {
        self.record(ViewEvent::SuggestionsError(message.to_string()));
    }
}
