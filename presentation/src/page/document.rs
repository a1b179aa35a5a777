//! Page document implementing both view ports

use super::reviews::ReviewExtractor;
use crate::suggestions;
use feedback_application::{ReviewReadError, SuggestionView, TriggerLabel, UploadView};
use feedback_domain::{AnalysisType, SuggestionItem, UploadFile};
use std::sync::{Mutex, MutexGuard};
use tracing::trace;

/// Error alert element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    pub visible: bool,
    pub text: String,
}

/// Everything the page shows, as seen by the handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    // Upload form
    pub file: Option<UploadFile>,
    pub analysis_type: AnalysisType,
    pub submit_enabled: bool,
    pub busy_visible: bool,
    pub error_alert: AlertState,
    pub location: String,

    // Suggestion widget
    pub reviews_markup: String,
    pub trigger_enabled: bool,
    pub trigger_markup: String,
    pub suggestions_markup: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            file: None,
            analysis_type: AnalysisType::default(),
            submit_enabled: true,
            busy_visible: false,
            error_alert: AlertState::default(),
            location: "/".to_string(),
            reviews_markup: String::new(),
            trigger_enabled: true,
            trigger_markup: suggestions::trigger_label(TriggerLabel::Idle),
            suggestions_markup: String::new(),
        }
    }
}

/// In-memory stand-in for the rendered feedback page
///
/// Shared between a handler and whoever drives the page; all state sits
/// behind one mutex.
pub struct PageDocument {
    state: Mutex<PageState>,
    extractor: ReviewExtractor,
}

impl PageDocument {
    pub fn new(extractor: ReviewExtractor) -> Self {
        Self {
            state: Mutex::new(PageState::default()),
            extractor,
        }
    }

    pub fn with_reviews_markup(self, markup: impl Into<String>) -> Self {
        self.set_reviews_markup(markup);
        self
    }

    pub fn with_file(self, file: UploadFile) -> Self {
        self.select_file(Some(file));
        self
    }

    pub fn with_analysis_type(self, analysis_type: AnalysisType) -> Self {
        self.select_analysis_type(analysis_type);
        self
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        // A panic while holding the lock cannot leave PageState half-written
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // ==================== User input ====================

    pub fn select_file(&self, file: Option<UploadFile>) {
        self.state().file = file;
    }

    pub fn select_analysis_type(&self, analysis_type: AnalysisType) {
        self.state().analysis_type = analysis_type;
    }

    /// Replace the results markup holding the review elements
    pub fn set_reviews_markup(&self, markup: impl Into<String>) {
        self.state().reviews_markup = markup.into();
    }

    // ==================== Inspection ====================

    pub fn snapshot(&self) -> PageState {
        self.state().clone()
    }

    pub fn location(&self) -> String {
        self.state().location.clone()
    }

    /// Text of the error alert, if it is showing
    pub fn visible_error(&self) -> Option<String> {
        let state = self.state();
        state
            .error_alert
            .visible
            .then(|| state.error_alert.text.clone())
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state().submit_enabled
    }

    pub fn is_busy_visible(&self) -> bool {
        self.state().busy_visible
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.state().trigger_enabled
    }

    pub fn trigger_markup(&self) -> String {
        self.state().trigger_markup.clone()
    }

    pub fn suggestions_markup(&self) -> String {
        self.state().suggestions_markup.clone()
    }
}

impl UploadView for PageDocument {
    fn selected_file(&self) -> Option<UploadFile> {
        self.state().file.clone()
    }

    fn analysis_type(&self) -> AnalysisType {
        self.state().analysis_type.clone()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.state().submit_enabled = enabled;
    }

    fn set_busy_visible(&self, visible: bool) {
        self.state().busy_visible = visible;
    }

    fn show_error(&self, message: &str) {
        self.state().error_alert = AlertState {
            visible: true,
            text: message.to_string(),
        };
    }

    fn hide_error(&self) {
        self.state().error_alert.visible = false;
    }

    fn navigate(&self, path: &str) {
        trace!("Navigating to {}", path);
        self.state().location = path.to_string();
    }
}

impl SuggestionView for PageDocument {
    fn negative_review_texts(&self) -> Result<Vec<String>, ReviewReadError> {
        let markup = self.state().reviews_markup.clone();
        Ok(self.extractor.extract(&markup)?)
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.state().trigger_enabled = enabled;
    }

    fn set_trigger_label(&self, label: TriggerLabel) {
        self.state().trigger_markup = suggestions::trigger_label(label);
    }

    fn show_suggestions_busy(&self) {
        self.state().suggestions_markup = suggestions::busy_placeholder();
    }

    fn show_suggestions(&self, items: &[SuggestionItem]) {
        self.state().suggestions_markup = suggestions::cards(items);
    }

    fn show_suggestions_error(&self, message: &str) {
        self.state().suggestions_markup = suggestions::error_block(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use feedback_application::{
        FeedbackGateway, GatewayError, GenerateResponsesUseCase, SubmitUploadUseCase,
    };
    use feedback_domain::{ReviewTextSet, UploadRequest};
    use scraper::{Html, Selector};
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Gateway replaying canned results and recording request bodies
    #[derive(Default)]
    struct CannedGateway {
        analyze: Mutex<VecDeque<Result<(), GatewayError>>>,
        suggestions: Mutex<VecDeque<Result<Vec<SuggestionItem>, GatewayError>>>,
        sent_reviews: Mutex<Vec<serde_json::Value>>,
    }

    impl CannedGateway {
        fn analyze_replies(replies: Vec<Result<(), GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                analyze: Mutex::new(replies.into()),
                ..Default::default()
            })
        }

        fn suggestion_replies(
            replies: Vec<Result<Vec<SuggestionItem>, GatewayError>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                suggestions: Mutex::new(replies.into()),
                ..Default::default()
            })
        }
    }

    #[async_trait]
    impl FeedbackGateway for CannedGateway {
        async fn analyze(&self, _request: &UploadRequest) -> Result<(), GatewayError> {
            self.analyze.lock().unwrap().pop_front().unwrap_or(Ok(()))
        }

        async fn generate_responses(
            &self,
            reviews: &ReviewTextSet,
        ) -> Result<Vec<SuggestionItem>, GatewayError> {
            self.sent_reviews
                .lock()
                .unwrap()
                .push(serde_json::to_value(reviews).unwrap());
            self.suggestions
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Vec::new()))
        }
    }

    fn rejected(message: &str) -> GatewayError {
        GatewayError::Rejected {
            status: 400,
            message: message.to_string(),
        }
    }

    fn texts(markup: &str, selector: &str) -> Vec<String> {
        let document = Html::parse_fragment(markup);
        let selector = Selector::parse(selector).unwrap();
        document
            .select(&selector)
            .map(|e| e.text().collect::<String>())
            .collect()
    }

    fn page() -> PageDocument {
        PageDocument::new(ReviewExtractor::standard().unwrap())
    }

    fn page_with_file() -> PageDocument {
        page().with_file(UploadFile::new("reviews.csv", b"Too slow".to_vec()).unwrap())
    }

    const TWO_NEGATIVE: &str = r#"
        <div class="card border-danger"><p>Too slow</p></div>
        <div class="card border-success"><p>Lovely</p></div>
        <div class="card border-danger"><p>Rude staff</p></div>
    "#;

    // ==================== Upload flow ====================

    #[tokio::test]
    async fn test_successful_analysis_navigates_to_results() {
        let page = page_with_file();
        let use_case = SubmitUploadUseCase::new(CannedGateway::analyze_replies(vec![Ok(())]));

        use_case.execute(&page).await.unwrap();

        assert_eq!(page.location(), "/results");
        assert!(page.is_submit_enabled());
        assert!(!page.is_busy_visible());
        assert_eq!(page.visible_error(), None);
    }

    #[tokio::test]
    async fn test_failed_analysis_shows_message() {
        let page = page_with_file();
        let gateway = CannedGateway::analyze_replies(vec![Err(rejected("Bad file"))]);
        let use_case = SubmitUploadUseCase::new(gateway);

        use_case.execute(&page).await.unwrap();

        assert_eq!(page.visible_error().as_deref(), Some("Bad file"));
        assert_eq!(page.location(), "/");
        assert!(page.is_submit_enabled());
        assert!(!page.is_busy_visible());
    }

    #[tokio::test]
    async fn test_new_submit_replaces_previous_error() {
        let page = page_with_file();
        let use_case = SubmitUploadUseCase::new(CannedGateway::analyze_replies(vec![
            Err(rejected("Bad file")),
            Err(GatewayError::Transport("connection refused".to_string())),
            Ok(()),
        ]));

        use_case.execute(&page).await.unwrap();
        use_case.execute(&page).await.unwrap();
        assert_eq!(page.visible_error().as_deref(), Some("connection refused"));

        use_case.execute(&page).await.unwrap();
        assert_eq!(page.visible_error(), None);
        assert_eq!(page.location(), "/results");
    }

    // ==================== Suggestion flow ====================

    #[tokio::test]
    async fn test_two_reviews_render_two_cards() {
        let page = page().with_reviews_markup(TWO_NEGATIVE);
        let gateway = CannedGateway::suggestion_replies(vec![Ok(vec![
            SuggestionItem::new("Too slow", "We're sorry..."),
            SuggestionItem::new("Rude staff", "We apologize..."),
        ])]);
        let use_case = GenerateResponsesUseCase::new(Arc::clone(&gateway));

        use_case.execute(&page).await.unwrap();

        assert_eq!(
            gateway.sent_reviews.lock().unwrap()[0],
            serde_json::json!({ "negative_reviews": ["Too slow", "Rude staff"] })
        );

        let markup = page.suggestions_markup();
        assert_eq!(texts(&markup, ".card").len(), 2);
        assert_eq!(texts(&markup, "h6"), vec!["Review #1:", "Review #2:"]);
        assert_eq!(
            texts(&markup, "p.text-muted"),
            vec!["\"Too slow\"", "\"Rude staff\""]
        );
        assert_eq!(
            texts(&markup, ".bg-light p"),
            vec!["We're sorry...", "We apologize..."]
        );
        assert_eq!(texts(&markup, ".bg-light strong"), vec!["Suggested Response:"; 2]);

        assert!(page.is_trigger_enabled());
        assert_eq!(page.trigger_markup(), suggestions::trigger_label(TriggerLabel::Idle));
    }

    #[tokio::test]
    async fn test_no_reviews_sends_empty_list_and_renders_nothing() {
        let page = page();
        let gateway = CannedGateway::suggestion_replies(vec![Ok(Vec::new())]);
        let use_case = GenerateResponsesUseCase::new(Arc::clone(&gateway));

        use_case.execute(&page).await.unwrap();

        assert_eq!(
            gateway.sent_reviews.lock().unwrap()[0],
            serde_json::json!({ "negative_reviews": [] })
        );
        assert_eq!(page.suggestions_markup(), "");
    }

    #[tokio::test]
    async fn test_failure_renders_single_error_block() {
        let page = page().with_reviews_markup(TWO_NEGATIVE);
        let gateway = CannedGateway::suggestion_replies(vec![Err(GatewayError::Rejected {
            status: 500,
            message: "Failed to generate responses".to_string(),
        })]);
        let use_case = GenerateResponsesUseCase::new(gateway);

        use_case.execute(&page).await.unwrap();

        let markup = page.suggestions_markup();
        assert_eq!(texts(&markup, ".alert.alert-danger"), vec!["Failed to generate responses"]);
        assert!(texts(&markup, ".card").is_empty());
        assert!(page.is_trigger_enabled());
        assert_eq!(page.trigger_markup(), suggestions::trigger_label(TriggerLabel::Idle));
    }

    #[tokio::test]
    async fn test_repeated_clicks_send_identical_payloads() {
        let page = page().with_reviews_markup(TWO_NEGATIVE);
        let gateway = CannedGateway::suggestion_replies(Vec::new());
        let use_case = GenerateResponsesUseCase::new(Arc::clone(&gateway));

        use_case.execute(&page).await.unwrap();
        use_case.execute(&page).await.unwrap();

        let sent = gateway.sent_reviews.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }

    #[tokio::test]
    async fn test_reviews_follow_current_markup() {
        let page = page().with_reviews_markup(TWO_NEGATIVE);
        let gateway = CannedGateway::suggestion_replies(Vec::new());
        let use_case = GenerateResponsesUseCase::new(Arc::clone(&gateway));

        use_case.execute(&page).await.unwrap();
        page.set_reviews_markup(r#"<div class="border-danger"><p>Cold food</p></div>"#);
        use_case.execute(&page).await.unwrap();

        let sent = gateway.sent_reviews.lock().unwrap();
        assert_eq!(sent[1], serde_json::json!({ "negative_reviews": ["Cold food"] }));
    }

    #[tokio::test]
    async fn test_review_without_text_renders_error_and_sends_nothing() {
        let page = page().with_reviews_markup(
            r#"<div class="border-danger"><p>Too slow</p></div>
               <div class="border-danger"><span>Rude staff</span></div>"#,
        );
        let gateway = CannedGateway::suggestion_replies(Vec::new());
        let use_case = GenerateResponsesUseCase::new(Arc::clone(&gateway));

        use_case.execute(&page).await.unwrap();

        assert!(gateway.sent_reviews.lock().unwrap().is_empty());
        let markup = page.suggestions_markup();
        assert_eq!(
            texts(&markup, ".alert.alert-danger"),
            vec!["Negative review #2 has no review text"]
        );
        assert!(page.is_trigger_enabled());
        assert_eq!(page.trigger_markup(), suggestions::trigger_label(TriggerLabel::Idle));
    }

    #[test]
    fn test_busy_state_markup() {
        let page = page();
        page.set_trigger_enabled(false);
        page.set_trigger_label(TriggerLabel::Busy);
        page.show_suggestions_busy();

        assert!(!page.is_trigger_enabled());
        assert!(page.trigger_markup().contains("Generating..."));
        assert!(page.suggestions_markup().contains("Generating response suggestions..."));
    }
}
