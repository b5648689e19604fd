use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the process configuration: the bot credential, the
/// active translation backend and the log level. Everything comes from the
/// environment, with CLI overrides applied in `main`.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Telegram bot token from BotFather
    pub telegram_token: String,

    /// Active translation backend
    #[serde(default)]
    pub backend: TranslationBackend,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation backend type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationBackend {
    /// Public Google web translation endpoint
    #[default]
    Google,
    /// MyMemory translation API
    MyMemory,
}

impl TranslationBackend {
    /// Capitalized backend name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google",
            Self::MyMemory => "MyMemory",
        }
    }

    /// Parse a backend name as supplied via environment variable
    pub fn from_str_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "google" => Some(Self::Google),
            "mymemory" => Some(Self::MyMemory),
            _ => None,
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Corresponding `log` crate filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }

    /// Parse a level name as supplied via environment variable
    pub fn from_str_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl Config {
    /// Environment variable holding the bot token
    pub const TOKEN_ENV: &'static str = "TELEGRAM_TOKEN";
    /// Environment variable selecting the translation backend
    pub const BACKEND_ENV: &'static str = "TARJIMON_PROVIDER";
    /// Environment variable setting the log level
    pub const LOG_LEVEL_ENV: &'static str = "TARJIMON_LOG_LEVEL";

    /// Build a configuration from the process environment
    ///
    /// The token comes from `token_override` when given (e.g. a CLI flag),
    /// otherwise from `TELEGRAM_TOKEN`. `TARJIMON_PROVIDER` and
    /// `TARJIMON_LOG_LEVEL` are read in either case, so an explicit token
    /// never disables the optional environment variables.
    pub fn load(token_override: Option<String>) -> Result<Self> {
        let telegram_token = match token_override {
            Some(token) => token,
            None => std::env::var(Self::TOKEN_ENV)
                .map_err(|_| anyhow!("{} environment variable is not set", Self::TOKEN_ENV))?,
        };

        Self::from_vars(
            telegram_token,
            std::env::var(Self::BACKEND_ENV).ok().as_deref(),
            std::env::var(Self::LOG_LEVEL_ENV).ok().as_deref(),
        )
    }

    /// Build a configuration from the process environment, token included
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Assemble a configuration from explicit values
    ///
    /// `backend` and `log_level` fall back to defaults when absent. Unknown
    /// values are rejected rather than silently defaulted, since a typo
    /// there is a configuration mistake.
    pub fn from_vars(
        telegram_token: impl Into<String>,
        backend: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self> {
        let backend = match backend {
            Some(name) => TranslationBackend::from_str_name(name)
                .ok_or_else(|| anyhow!("Unknown translation backend: {}", name))?,
            None => TranslationBackend::default(),
        };

        let log_level = match log_level {
            Some(name) => LogLevel::from_str_name(name)
                .ok_or_else(|| anyhow!("Unknown log level: {}", name))?,
            None => LogLevel::default(),
        };

        let config = Self {
            telegram_token: telegram_token.into(),
            backend,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration from an explicit token, keeping defaults
    pub fn with_token(telegram_token: impl Into<String>) -> Self {
        Self {
            telegram_token: telegram_token.into(),
            backend: TranslationBackend::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.telegram_token.trim().is_empty() {
            return Err(anyhow!("Telegram bot token is empty"));
        }
        Ok(())
    }
}
