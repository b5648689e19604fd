/*!
 * Minimal Telegram Bot API transport.
 *
 * This module covers exactly the Bot API subset the bot consumes:
 * - `getMe` for startup token validation
 * - `getUpdates` long polling
 * - `sendMessage` (plain, HTML or Markdown, optional inline keyboard)
 * - `editMessageText`
 * - `answerCallbackQuery`
 */

pub mod client;
pub mod models;

pub use client::BotClient;
pub use models::{
    CallbackQuery, Chat, InlineKeyboardButton, InlineKeyboardMarkup, Message, ParseMode,
    SendMessage, Update, User,
};
