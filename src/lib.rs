/*!
 * # Tarjimon - Uzbek-Russian Telegram translation bot
 *
 * A small relay bot: it receives text messages over Telegram, keeps a
 * per-user translation direction, forwards the text to an external
 * translation backend and replies with the result.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration from the environment
 * - `session`: Per-user direction state behind an injectable store
 * - `providers`: Client implementations for the translation backends:
 *   - `providers::google`: Public Google web translation endpoint
 *   - `providers::mymemory`: MyMemory translation API
 *   - `providers::mock`: Recording test double
 * - `telegram`: Minimal Telegram Bot API client (long polling)
 * - `app_controller`: Interaction handlers and the dispatch loop
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod providers;
pub mod session;
pub mod telegram;

// Re-export main types for easier usage
pub use app_config::{Config, TranslationBackend};
pub use app_controller::{Controller, Reply};
pub use errors::{AppError, ProviderError, TelegramError};
pub use providers::{TranslationProvider, TranslationRequest};
pub use session::{Direction, InMemorySessionStore, SessionStore};
