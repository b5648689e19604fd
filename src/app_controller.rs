use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::providers::{TranslationProvider, TranslationRequest};
use crate::session::{Direction, SessionStore};
use crate::telegram::{
    BotClient, CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, SendMessage,
    Update, User,
};

// @module: Update dispatch and interaction handlers

/// Marker prefixed to every successful translation reply
const TRANSLATION_MARKER: &str = "🔄 Tarjima:";

/// Fixed user-facing message for any provider failure
const FAILURE_MESSAGE: &str =
    "Tarjima vaqtida xatolik yuz berdi. Iltimos, qayta urinib ko'ring.";

/// Prompt shown when text arrives before a direction was chosen
const CHOOSE_FIRST_MESSAGE: &str = "Iltimos, avval tarjima yo'nalishini tanlang:";

/// Static help text, in Telegram Markdown
const HELP_MESSAGE: &str = "📝 *O'zbekcha-Ruscha tarjimon bot haqida*\n\n\
    Botdan foydalanish uchun qo'llanma:\n\
    1. /start - Botni ishga tushirish\n\
    2. Tarjima yo'nalishini tanlang\n\
    3. Tarjima qilmoqchi bo'lgan matningizni yuboring\n\n\
    Yo'nalishni o'zgartirish uchun /start buyrug'ini qayta ishlating.\n\
    Yordam uchun /help buyrug'ini ishlating.";

/// Pause before retrying after a failed getUpdates call
const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

/// The outcome of a handler: what to say and how
///
/// Handlers produce a `Reply` instead of talking to the transport directly,
/// which keeps them testable against a mock provider and an in-memory store.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Message text
    pub text: String,
    /// Formatting mode, `None` for plain text
    pub parse_mode: Option<ParseMode>,
    /// Inline keyboard to attach, if any
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl Reply {
    /// Plain text reply
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
            keyboard: None,
        }
    }

    /// Reply using Telegram's HTML subset
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            parse_mode: Some(ParseMode::Html),
            ..Self::plain(text)
        }
    }

    /// Reply using legacy Markdown
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            parse_mode: Some(ParseMode::Markdown),
            ..Self::plain(text)
        }
    }

    /// Attach an inline keyboard
    pub fn with_keyboard(mut self, keyboard: InlineKeyboardMarkup) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    /// Convert into a `sendMessage` payload for the given chat
    pub fn into_send_message(self, chat_id: i64) -> SendMessage {
        let mut message = SendMessage::new(chat_id, self.text);
        if let Some(mode) = self.parse_mode {
            message = message.parse_mode(mode);
        }
        if let Some(keyboard) = self.keyboard {
            message = message.reply_markup(keyboard);
        }
        message
    }
}

/// The two-button direction chooser presented on /start and re-prompts
pub fn direction_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: vec![vec![
            InlineKeyboardButton::callback(
                "🇺🇿 O'zbekcha -> 🇷🇺 Ruscha",
                Direction::UzToRu.callback_data(),
            ),
            InlineKeyboardButton::callback(
                "🇷🇺 Ruscha -> 🇺🇿 O'zbekcha",
                Direction::RuToUz.callback_data(),
            ),
        ]],
    }
}

/// Main application controller for the translation bot
///
/// Owns the translation backend and the session store; both are injected so
/// the handler logic stays independent of the concrete backends.
pub struct Controller {
    /// Active translation backend
    provider: Arc<dyn TranslationProvider>,
    /// Per-user direction storage
    sessions: Arc<dyn SessionStore>,
}

impl Controller {
    /// Create a new controller with the given collaborators
    pub fn new(provider: Arc<dyn TranslationProvider>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { provider, sessions }
    }

    /// Greeting shown on /start, with the direction chooser attached
    pub fn greeting(&self, user: &User) -> Reply {
        let text = format!(
            "Assalomu alaykum, {}! 👋\n\n\
             Men O'zbekcha-Ruscha tarjimon botman. Tarjima yo'nalishini tanlang:",
            user.mention_html()
        );
        Reply::html(text).with_keyboard(direction_keyboard())
    }

    /// Static usage help shown on /help
    pub fn help(&self) -> Reply {
        Reply::markdown(HELP_MESSAGE)
    }

    /// Record a chosen direction and confirm it
    ///
    /// Overwrites any previous choice unconditionally; there is no error
    /// path because the chooser only offers the two valid options.
    pub fn select_direction(&self, user_id: i64, direction: Direction) -> Reply {
        self.sessions.set_direction(user_id, direction);
        info!("User {} selected direction {:?}", user_id, direction);

        let source = match direction {
            Direction::UzToRu => "O'zbekcha",
            Direction::RuToUz => "Ruscha",
        };
        Reply::plain(format!(
            "{} tarjima rejimi tanlandi. {} matn yuboring.",
            direction.display_name(),
            source
        ))
    }

    /// Relay a freeform text message through the translation provider
    ///
    /// Without a stored direction this is a re-prompt, not an error, and the
    /// provider is never called. With one, the text goes to the provider in
    /// a single attempt; any failure collapses to one fixed user message.
    pub async fn translate_message(&self, user_id: i64, text: &str) -> Reply {
        let Some(direction) = self.sessions.direction(user_id) else {
            debug!("User {} sent text before choosing a direction", user_id);
            return Reply::plain(CHOOSE_FIRST_MESSAGE).with_keyboard(direction_keyboard());
        };

        let (source, target) = direction.language_pair();
        let request = TranslationRequest::new(source, target, text);

        match self.provider.translate(&request).await {
            Ok(translated) => Reply::plain(format!("{}\n\n{}", TRANSLATION_MARKER, translated)),
            Err(e) => {
                error!("Translation via {} failed: {}", self.provider.name(), e);
                Reply::plain(FAILURE_MESSAGE)
            }
        }
    }

    /// Dispatch a single inbound update to the right handler
    ///
    /// Every update is handled in isolation; an error here is reported to
    /// the caller for logging but never tears down the polling loop.
    pub async fn handle_update(&self, bot: &BotClient, update: Update) -> Result<()> {
        if let Some(query) = update.callback_query {
            return self.handle_callback(bot, query).await;
        }

        let Some(message) = update.message else {
            debug!("Ignoring update {} with no usable payload", update.update_id);
            return Ok(());
        };
        let (Some(user), Some(text)) = (message.from.as_ref(), message.text.as_deref()) else {
            debug!("Ignoring non-text message {}", message.message_id);
            return Ok(());
        };

        let reply = if let Some(command) = parse_command(text) {
            match command {
                "start" => self.greeting(user),
                "help" => self.help(),
                other => {
                    debug!("Ignoring unknown command /{}", other);
                    return Ok(());
                }
            }
        } else {
            self.translate_message(user.id, text).await
        };

        bot.send_message(&reply.into_send_message(message.chat.id))
            .await?;
        Ok(())
    }

    /// Handle a direction button press
    async fn handle_callback(&self, bot: &BotClient, query: CallbackQuery) -> Result<()> {
        bot.answer_callback_query(&query.id).await?;

        let Some(direction) = query.data.as_deref().and_then(Direction::from_callback_data)
        else {
            warn!("Callback query {} carried an unknown payload", query.id);
            return Ok(());
        };

        let reply = self.select_direction(query.from.id, direction);
        match query.message {
            // Replace the chooser message with the confirmation, like the
            // original bot did.
            Some(message) => {
                bot.edit_message_text(message.chat.id, message.message_id, reply.text)
                    .await?;
            }
            // The chooser message is too old for Telegram to reference;
            // fall back to a fresh message.
            None => {
                bot.send_message(&reply.into_send_message(query.from.id))
                    .await?;
            }
        }
        Ok(())
    }

    /// Run the long polling dispatch loop
    ///
    /// Each update is handled on its own task so one user's slow provider
    /// call does not delay the others. Transport errors on getUpdates are
    /// logged and the loop resumes after a short pause.
    pub async fn run(self: Arc<Self>, bot: Arc<BotClient>) {
        let mut offset: Option<i64> = None;

        loop {
            let updates = match bot.get_updates(offset).await {
                Ok(updates) => updates,
                Err(e) => {
                    error!("Failed to fetch updates: {}", e);
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = Some(update.update_id + 1);

                let controller = Arc::clone(&self);
                let bot = Arc::clone(&bot);
                tokio::spawn(async move {
                    let update_id = update.update_id;
                    if let Err(e) = controller.handle_update(&bot, update).await {
                        error!("Failed to handle update {}: {}", update_id, e);
                    }
                });
            }
        }
    }
}

/// Extract the command name from a message, if it is one
///
/// Accepts the `/command@botname` form and returns the bare name. The name
/// must start immediately after the slash; `"/ start"` and other ordinary
/// text yield `None` and are relayed for translation instead.
fn parse_command(text: &str) -> Option<&str> {
    let stripped = text.strip_prefix('/')?;
    let end = stripped
        .find(|c: char| c.is_whitespace() || c == '@')
        .unwrap_or(stripped.len());
    let name = &stripped[..end];
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
