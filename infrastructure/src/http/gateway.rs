//! reqwest implementation of the feedback gateway

use super::error::{HttpGatewayError, Result};
use async_trait::async_trait;
use feedback_application::{EndpointConfig, FeedbackGateway, GatewayError};
use feedback_domain::util::truncate_str;
use feedback_domain::{
    ANALYSIS_FAILED, ErrorBody, RESPONSES_FAILED, ReviewTextSet, SuggestionItem,
    SuggestionsResponse, UploadRequest,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Longest slice of a response body written to the debug log
const LOG_BODY_BYTES: usize = 512;

/// Gateway talking to the feedback service over HTTP
///
/// Endpoint URLs are resolved once, against the base URL, the way a browser
/// resolves absolute paths against the page origin.
pub struct HttpFeedbackGateway {
    client: Client,
    analyze_url: Url,
    results_url: Url,
    suggestions_url: Url,
}

impl HttpFeedbackGateway {
    /// Create a gateway with the default endpoint paths and no timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, &EndpointConfig::default(), None)
    }

    /// Create a gateway from configured paths and an optional request timeout
    pub fn with_config(
        base_url: &str,
        endpoints: &EndpointConfig,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| HttpGatewayError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            analyze_url: Self::resolve(&base, &endpoints.analyze)?,
            results_url: Self::resolve(&base, &endpoints.results)?,
            suggestions_url: Self::resolve(&base, &endpoints.generate_responses)?,
        })
    }

    fn resolve(base: &Url, path: &str) -> Result<Url> {
        base.join(path).map_err(|e| HttpGatewayError::InvalidEndpoint {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Absolute URL of the results page
    pub fn results_url(&self) -> &Url {
        &self.results_url
    }

    /// Send a request and return the raw body of a 2xx response
    ///
    /// A non-2xx status becomes [`GatewayError::Rejected`] carrying the body's
    /// `error` field, or `fallback` when the body has none.
    async fn send(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> std::result::Result<Vec<u8>, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            warn!(
                "Server answered {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            debug!("Error body: {}", truncate_str(&text, LOG_BODY_BYTES));
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: ErrorBody::from_slice(&body).message_or(fallback),
            });
        }

        Ok(body.to_vec())
    }

    fn upload_form(request: &UploadRequest) -> std::result::Result<Form, GatewayError> {
        let mut form = Form::new();

        if let Some(file) = &request.file {
            let mut part =
                Part::bytes(file.bytes().to_vec()).file_name(file.file_name().to_string());
            if let Some(mime) = file.mime() {
                part = part.mime_str(mime).map_err(|e| {
                    GatewayError::InvalidRequest(format!("Invalid file type {mime:?}: {e}"))
                })?;
            }
            form = form.part(UploadRequest::FILE_FIELD, part);
        }

        Ok(form.text(
            UploadRequest::ANALYSIS_TYPE_FIELD,
            request.analysis_type.to_string(),
        ))
    }
}

#[async_trait]
impl FeedbackGateway for HttpFeedbackGateway {
    async fn analyze(&self, request: &UploadRequest) -> std::result::Result<(), GatewayError> {
        debug!("POST {} ({:?})", self.analyze_url, request.file);

        let form = Self::upload_form(request)?;
        let body = self
            .send(self.client.post(self.analyze_url.clone()).multipart(form), ANALYSIS_FAILED)
            .await?;

        // Only the status matters, but the body must still be JSON.
        serde_json::from_slice::<serde_json::Value>(&body).map_err(|e| {
            GatewayError::InvalidResponse(format!("Invalid analysis response: {e}"))
        })?;

        Ok(())
    }

    async fn generate_responses(
        &self,
        reviews: &ReviewTextSet,
    ) -> std::result::Result<Vec<SuggestionItem>, GatewayError> {
        debug!("POST {} ({} reviews)", self.suggestions_url, reviews.len());

        let body = self
            .send(
                self.client.post(self.suggestions_url.clone()).json(reviews),
                RESPONSES_FAILED,
            )
            .await?;

        let response: SuggestionsResponse = serde_json::from_slice(&body).map_err(|e| {
            GatewayError::InvalidResponse(format!("Invalid suggestions response: {e}"))
        })?;

        Ok(response.suggested_responses)
    }
}
