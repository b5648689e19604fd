/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the supported translation
 * backends:
 * - Google: the public Google web translation endpoint
 * - MyMemory: the MyMemory translation memory API
 *
 * The bot existed historically in two near-identical variants differing only
 * in which backend they called; the `TranslationProvider` trait keeps that
 * choice out of the handler logic entirely.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single translation request, built per incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// ISO 639-1 code of the source language
    pub source_language: String,
    /// ISO 639-1 code of the target language
    pub target_language: String,
    /// The text to translate, passed through verbatim (empty text included)
    pub text: String,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            text: text.into(),
        }
    }
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all backend implementations must
/// follow, allowing them to be used interchangeably by the bot. It is
/// object-safe so the active backend can be selected at startup.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate the request text in a single attempt
    ///
    /// # Arguments
    /// * `request` - The source/target language pair and the text to translate
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError>;

    /// Short backend name used in log messages
    fn name(&self) -> &'static str;
}

pub mod google;
pub mod mymemory;
pub mod mock;
