/*!
 * Common test utilities for the tarjimon test suite
 */

use std::sync::Arc;

use tarjimon::app_controller::Controller;
use tarjimon::providers::mock::MockProvider;
use tarjimon::session::{InMemorySessionStore, SessionStore};
use tarjimon::telegram::User;

/// A sample Telegram user for tests
pub fn test_user(id: i64, first_name: &str) -> User {
    User {
        id,
        first_name: first_name.to_string(),
        username: None,
    }
}

/// Build a controller around the given mock provider and a fresh store
pub fn controller_with(provider: MockProvider) -> (Controller, Arc<InMemorySessionStore>) {
    let sessions = Arc::new(InMemorySessionStore::new());
    let store: Arc<dyn SessionStore> = Arc::clone(&sessions) as Arc<dyn SessionStore>;
    let controller = Controller::new(Arc::new(provider), store);
    (controller, sessions)
}
