/*!
 * Serde models for the consumed Telegram Bot API subset.
 */

use serde::{Deserialize, Serialize};

/// Generic Bot API response envelope
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded
    pub ok: bool,
    /// The payload, present when `ok` is true
    pub result: Option<T>,
    /// Human-readable error description, present when `ok` is false
    pub description: Option<String>,
}

/// An incoming update from `getUpdates`
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonically increasing update identifier
    pub update_id: i64,
    /// Present for message updates
    pub message: Option<Message>,
    /// Present for inline keyboard button presses
    pub callback_query: Option<CallbackQuery>,
}

/// A Telegram message
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Message identifier, unique within the chat
    pub message_id: i64,
    /// Sender; absent for channel posts
    pub from: Option<User>,
    /// The chat the message belongs to
    pub chat: Chat,
    /// Text content, absent for non-text messages
    pub text: Option<String>,
}

/// A Telegram chat
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Chat identifier
    pub id: i64,
}

/// A Telegram user
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// User identifier
    pub id: i64,
    /// First name, always present
    pub first_name: String,
    /// Username, without the leading @
    pub username: Option<String>,
}

impl User {
    /// HTML link mentioning this user, with the name escaped
    pub fn mention_html(&self) -> String {
        let mut escaped = String::with_capacity(self.first_name.len());
        for c in self.first_name.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                _ => escaped.push(c),
            }
        }
        format!("<a href=\"tg://user?id={}\">{}</a>", self.id, escaped)
    }
}

/// An inline keyboard button press
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    /// Query identifier, needed for `answerCallbackQuery`
    pub id: String,
    /// The user who pressed the button
    pub from: User,
    /// The message the button was attached to
    pub message: Option<Message>,
    /// The button's callback payload
    pub data: Option<String>,
}

/// Inline keyboard attached to an outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    /// Rows of buttons
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// A single inline keyboard button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Button label
    pub text: String,
    /// Payload delivered back in the callback query
    pub callback_data: String,
}

impl InlineKeyboardButton {
    /// Create a callback button
    pub fn callback(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Text formatting mode for outgoing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    /// Telegram HTML subset
    #[serde(rename = "HTML")]
    Html,
    /// Legacy Markdown
    Markdown,
}

/// Payload for `sendMessage`
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    /// Destination chat
    pub chat_id: i64,
    /// Message text
    pub text: String,
    /// Formatting mode, omitted for plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    /// Inline keyboard, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendMessage {
    /// Create a plain text message
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: None,
            reply_markup: None,
        }
    }

    /// Set the formatting mode
    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    /// Attach an inline keyboard
    pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}

/// Payload for `editMessageText`
#[derive(Debug, Clone, Serialize)]
pub struct EditMessageText {
    /// Chat containing the message
    pub chat_id: i64,
    /// The message to edit
    pub message_id: i64,
    /// Replacement text
    pub text: String,
}

/// Payload for `getUpdates`
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdates {
    /// Identifier of the first update to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Long polling timeout in seconds
    pub timeout: u64,
}

/// Payload for `answerCallbackQuery`
#[derive(Debug, Clone, Serialize)]
pub struct AnswerCallbackQuery {
    /// The query to acknowledge
    pub callback_query_id: String,
}
