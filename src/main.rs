use std::io::Write;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::app_config::{Config, LogLevel, TranslationBackend};
use crate::app_controller::Controller;
use crate::providers::google::GoogleTranslate;
use crate::providers::mymemory::MyMemory;
use crate::providers::TranslationProvider;
use crate::session::InMemorySessionStore;
use crate::telegram::BotClient;

mod app_config;
mod app_controller;
mod errors;
mod providers;
mod session;
mod telegram;

/// CLI Wrapper for TranslationBackend to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProvider {
    Google,
    MyMemory,
}

impl From<CliProvider> for TranslationBackend {
    fn from(cli_provider: CliProvider) -> Self {
        match cli_provider {
            CliProvider::Google => TranslationBackend::Google,
            CliProvider::MyMemory => TranslationBackend::MyMemory,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// Tarjimon - Uzbek-Russian Telegram translation bot
///
/// Runs a long polling Telegram bot that translates between Uzbek and
/// Russian using an external translation backend.
#[derive(Parser, Debug)]
#[command(name = "tarjimon")]
#[command(version = "1.0.0")]
#[command(about = "Uzbek-Russian Telegram translation bot")]
struct CommandLineOptions {
    /// Telegram bot token (falls back to the TELEGRAM_TOKEN variable)
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliProvider>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Construct the configured translation backend
fn build_provider(backend: TranslationBackend) -> Arc<dyn TranslationProvider> {
    match backend {
        TranslationBackend::Google => Arc::new(GoogleTranslate::default()),
        TranslationBackend::MyMemory => Arc::new(MyMemory::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default; the level is
    // adjusted after the configuration is known.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // Configuration errors are fatal before the dispatch loop starts, with
    // a diagnostic telling the operator how to fix them. The optional
    // environment variables are read whether or not the token came from the
    // CLI; CLI flags override them.
    let mut config = Config::load(cli.token).map_err(|e| {
        eprintln!("XATOLIK: {}", e);
        eprintln!("1. Telegram BotFather orqali bot yarating va token oling.");
        eprintln!(
            "2. Tokenni muhit o'zgaruvchisi sifatida sozlang: export {}=<token>",
            Config::TOKEN_ENV
        );
        anyhow!("missing or invalid configuration")
    })?;

    if let Some(provider) = cli.provider {
        config.backend = provider.into();
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    config.validate()?;
    log::set_max_level(config.log_level.to_level_filter());

    let bot = Arc::new(BotClient::new(&config.telegram_token));

    // Validate the token before entering the polling loop so a bad
    // credential fails fast instead of erroring on every poll.
    let me = match bot.get_me().await {
        Ok(me) => me,
        Err(e) => {
            error!("Bot initialization failed: {}", e);
            eprintln!("XATOLIK: Yaroqsiz token! {}", e);
            eprintln!("Iltimos, BotFather dan olingan to'g'ri tokenni ishlating.");
            return Err(e.into());
        }
    };

    let provider = build_provider(config.backend);
    info!(
        "Bot ishga tushdi... (@{}, backend: {})",
        me.username.as_deref().unwrap_or("unknown"),
        config.backend.display_name()
    );

    let controller = Arc::new(Controller::new(
        provider,
        Arc::new(InMemorySessionStore::new()),
    ));
    controller.run(bot).await;
    Ok(())
}
