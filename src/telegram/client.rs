use std::time::Duration;

use log::error;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::TelegramError;
use crate::telegram::models::{
    AnswerCallbackQuery, ApiResponse, EditMessageText, GetUpdates, Message, SendMessage, Update,
    User,
};

/// Long polling timeout passed to `getUpdates`, in seconds
const POLL_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the Telegram Bot API
///
/// One instance per bot token, shared behind an `Arc` by the dispatch loop.
#[derive(Debug)]
pub struct BotClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL including the token, e.g. `https://api.telegram.org/bot<token>`
    base_url: String,
}

impl BotClient {
    /// Create a new client for the given bot token
    pub fn new(token: &str) -> Self {
        Self::with_api_url("https://api.telegram.org", token)
    }

    /// Create a client against a custom API server (used by tests)
    pub fn with_api_url(api_url: &str, token: &str) -> Self {
        Self {
            client: Client::builder()
                // Must exceed the long polling timeout or getUpdates would
                // be cut off mid-poll.
                .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
                .build()
                .unwrap_or_default(),
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        }
    }

    /// Issue one Bot API method call and unwrap the response envelope
    async fn call<R, T>(&self, method: &str, payload: &R) -> Result<T, TelegramError>
    where
        R: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, method);
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| TelegramError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let envelope = response
            .json::<ApiResponse<T>>()
            .await
            .map_err(|e| TelegramError::ParseError(e.to_string()))?;

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| "no description".to_string());
            error!("Telegram API error on {} ({}): {}", method, status, description);
            return Err(TelegramError::ApiError {
                status_code: status.as_u16(),
                description,
            });
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::ParseError("ok response without result".to_string()))
    }

    /// Validate the token and fetch the bot's own identity
    ///
    /// A 401 from the API means the token was rejected, which is surfaced as
    /// `InvalidToken` so startup can fail fast with a clear diagnostic.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        match self.call("getMe", &serde_json::json!({})).await {
            Err(TelegramError::ApiError {
                status_code: 401,
                description,
            }) => Err(TelegramError::InvalidToken(description)),
            other => other,
        }
    }

    /// Fetch the next batch of updates, long polling until some arrive
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TelegramError> {
        let payload = GetUpdates {
            offset,
            timeout: POLL_TIMEOUT_SECS,
        };
        self.call("getUpdates", &payload).await
    }

    /// Send a message
    pub async fn send_message(&self, message: &SendMessage) -> Result<Message, TelegramError> {
        self.call("sendMessage", message).await
    }

    /// Replace the text of an already-sent message
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: impl Into<String>,
    ) -> Result<(), TelegramError> {
        let payload = EditMessageText {
            chat_id,
            message_id,
            text: text.into(),
        };
        // The result is the edited Message (or `true` for inline messages);
        // neither is needed by callers.
        let _: Value = self.call("editMessageText", &payload).await?;
        Ok(())
    }

    /// Acknowledge a callback query so the client stops showing a spinner
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<(), TelegramError> {
        let payload = AnswerCallbackQuery {
            callback_query_id: callback_query_id.to_string(),
        };
        let _: Value = self.call("answerCallbackQuery", &payload).await?;
        Ok(())
    }
}
