use reqwest::{Client, Url};
use tracing::debug;

use super::response::extract_translation;
use super::{LanguagePair, TranslateError};

/// Base URL of the public Google translate endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Path of the single-sentence translate call, relative to the endpoint base.
const TRANSLATE_PATH: &str = "translate_a/single";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, languages: &LanguagePair) -> Self {
        Self {
            text: text.into(),
            source_language: languages.from.clone(),
            target_language: languages.to.clone(),
        }
    }
}

/// Builds the `translate_a/single` URL for a request.
///
/// Query values are percent-encoded, so `&`, `#` and non-ASCII input
/// cannot corrupt the request.
pub fn build_url(endpoint: &str, request: &TranslationRequest) -> Result<Url, TranslateError> {
    let base = format!("{}/{TRANSLATE_PATH}", endpoint.trim_end_matches('/'));

    Url::parse_with_params(
        &base,
        &[
            ("client", "gtx"),
            ("sl", request.source_language.as_str()),
            ("tl", request.target_language.as_str()),
            ("dt", "t"),
            ("q", request.text.as_str()),
        ],
    )
    .map_err(|source| TranslateError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Client for the gtx translate endpoint.
///
/// Holds no per-call state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Translates `input` from `languages.from` to `languages.to`.
    pub async fn translate_text(
        &self,
        input: &str,
        languages: &LanguagePair,
    ) -> Result<String, TranslateError> {
        self.translate(&TranslationRequest::new(input, languages)).await
    }

    /// Issues one GET for `request` and extracts the translated sentence.
    ///
    /// No timeout is applied; callers wanting bounded latency wrap the
    /// returned future themselves.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let url = build_url(&self.endpoint, request)?;

        debug!(
            from = %request.source_language,
            to = %request.target_language,
            chars = request.text.chars().count(),
            "requesting translation"
        );

        let network_error = |source| TranslateError::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status { status, body });
        }

        let body = response.text().await.map_err(network_error)?;
        debug!(%status, bytes = body.len(), "received translation response");

        extract_translation(&body)
    }
}
