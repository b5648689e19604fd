use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Default endpoint for the MyMemory translation API
const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Request timeout for translation calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// MyMemory API response envelope
#[derive(Debug, Deserialize)]
pub struct MyMemoryResponse {
    /// The translation payload
    #[serde(rename = "responseData")]
    pub response_data: MyMemoryData,
    /// Status code embedded in the body (200 on success)
    #[serde(rename = "responseStatus", deserialize_with = "status_as_u16")]
    pub response_status: u16,
    /// Error detail, present when the embedded status is not 200
    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<String>,
}

/// Translation payload of a MyMemory response
#[derive(Debug, Deserialize)]
pub struct MyMemoryData {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

// MyMemory reports the status as a number on success but as a string on some
// error responses.
fn status_as_u16<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u16),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Client for the MyMemory translation API
#[derive(Debug)]
pub struct MyMemory {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL (overridable for tests)
    endpoint: String,
}

impl Default for MyMemory {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl MyMemory {
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

    /// Extract the translated text from a parsed response, honoring the
    /// status embedded in the body
    pub fn extract_translation(response: MyMemoryResponse) -> Result<String, ProviderError> {
        if response.response_status != 200 {
            return Err(ProviderError::ApiError {
                status_code: response.response_status,
                message: response
                    .response_details
                    .unwrap_or_else(|| "no detail provided".to_string()),
            });
        }
        Ok(response.response_data.translated_text)
    }
}

#[async_trait]
impl TranslationProvider for MyMemory {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let langpair = format!("{}|{}", request.source_language, request.target_language);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", request.text.as_str()), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            error!("MyMemory error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<MyMemoryResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(body)
    }

    fn name(&self) -> &'static str {
        "mymemory"
    }
}
