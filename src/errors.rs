/*!
 * Error types for the tarjimon application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling the translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making the translation request fails
    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing the provider response fails
    #[error("Failed to parse provider response: {0}")]
    ParseError(String),

    /// Error returned by the provider itself
    #[error("Provider responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the provider
        message: String,
    },
}

/// Errors that can occur when talking to the Telegram Bot API
#[derive(Error, Debug)]
pub enum TelegramError {
    /// Error when making an API request fails
    #[error("Telegram request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse Telegram response: {0}")]
    ParseError(String),

    /// Error returned by the Bot API itself
    #[error("Telegram API error: {status_code} - {description}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error description from the API
        description: String,
    },

    /// The bot token was rejected during initialization
    #[error("Invalid bot token: {0}")]
    InvalidToken(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error in the process configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the Telegram transport
    #[error("Telegram error: {0}")]
    Telegram(#[from] TelegramError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
