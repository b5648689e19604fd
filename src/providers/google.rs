use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Default endpoint for the public Google web translation service
const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Request timeout for translation calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the public Google web translation endpoint
///
/// This is the same unauthenticated `client=gtx` endpoint the original bot
/// used. The response is an untyped nested array, so parsing goes through
/// `serde_json::Value`.
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL (overridable for tests)
    endpoint: String,
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl GoogleTranslate {
    /// Create a new client targeting the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Extract the translated text from a gtx response body
    ///
    /// The body is a nested array; element 0 is a list of segments, each of
    /// which is itself an array whose element 0 holds the translated chunk.
    /// Segments are concatenated in order.
    pub fn extract_translation(body: &Value) -> Result<String, ProviderError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("missing segment list".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(chunk) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(chunk);
            }
        }
        Ok(translated)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", request.source_language.as_str()),
                ("tl", request.target_language.as_str()),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            error!("Google translate error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(&body)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
