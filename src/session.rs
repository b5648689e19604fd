/*!
 * Per-user session state for the translation bot.
 *
 * A session records which translation direction a user has chosen. State is
 * in-memory and process-bound: it is created on the first direction selection,
 * overwritten on later selections, and lost on restart (the bot simply
 * re-prompts).
 */

use std::collections::HashMap;

use parking_lot::RwLock;

/// The two supported translation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Uzbek to Russian
    UzToRu,
    /// Russian to Uzbek
    RuToUz,
}

impl Direction {
    /// Callback payload carried by the corresponding inline keyboard button
    pub fn callback_data(&self) -> &'static str {
        match self {
            Self::UzToRu => "uz-ru",
            Self::RuToUz => "ru-uz",
        }
    }

    /// Parse a callback payload back into a direction
    ///
    /// Only the two payloads produced by `callback_data` are valid; anything
    /// else yields `None`.
    pub fn from_callback_data(data: &str) -> Option<Self> {
        match data {
            "uz-ru" => Some(Self::UzToRu),
            "ru-uz" => Some(Self::RuToUz),
            _ => None,
        }
    }

    /// The (source, target) ISO 639-1 language codes for this direction
    ///
    /// These are the two supported locales of the bot and are not
    /// user-configurable.
    pub fn language_pair(&self) -> (&'static str, &'static str) {
        match self {
            Self::UzToRu => ("uz", "ru"),
            Self::RuToUz => ("ru", "uz"),
        }
    }

    /// Human-readable label, as shown on the chooser buttons
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UzToRu => "O'zbekcha -> Ruscha",
            Self::RuToUz => "Ruscha -> O'zbekcha",
        }
    }
}

/// Storage interface for per-user session state
///
/// Handlers depend on this trait rather than a concrete map so the backend
/// can be swapped (e.g. for a persistent store) without touching handler
/// logic.
pub trait SessionStore: Send + Sync {
    /// Record the chosen direction for a user, overwriting any previous choice
    fn set_direction(&self, user_id: i64, direction: Direction);

    /// Look up the chosen direction for a user, if any
    fn direction(&self, user_id: i64) -> Option<Direction>;
}

/// Process-wide in-memory session store
///
/// Keys are Telegram user ids, which are disjoint per user, so a plain
/// read-write lock around the map is sufficient. No eviction: volume is
/// small and the store lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    directions: RwLock<HashMap<i64, Direction>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn set_direction(&self, user_id: i64, direction: Direction) {
        self.directions.write().insert(user_id, direction);
    }

    fn direction(&self, user_id: i64) -> Option<Direction> {
        self.directions.read().get(&user_id).copied()
    }
}
