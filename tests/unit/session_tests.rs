/*!
 * Tests for per-user session state
 */

use tarjimon::session::{Direction, InMemorySessionStore, SessionStore};

#[test]
fn test_direction_shouldBeAbsentBeforeFirstSelection() {
    let store = InMemorySessionStore::new();
    assert_eq!(store.direction(1), None);
    assert_eq!(store.direction(42), None);
}

#[test]
fn test_setDirection_shouldBeReadableBack() {
    let store = InMemorySessionStore::new();
    store.set_direction(1, Direction::UzToRu);
    assert_eq!(store.direction(1), Some(Direction::UzToRu));
}

#[test]
fn test_setDirection_shouldOverwritePreviousChoice() {
    let store = InMemorySessionStore::new();
    store.set_direction(1, Direction::UzToRu);
    store.set_direction(1, Direction::RuToUz);
    assert_eq!(store.direction(1), Some(Direction::RuToUz));
}

#[test]
fn test_setDirection_shouldKeepUsersIndependent() {
    let store = InMemorySessionStore::new();
    store.set_direction(1, Direction::UzToRu);
    store.set_direction(2, Direction::RuToUz);

    assert_eq!(store.direction(1), Some(Direction::UzToRu));
    assert_eq!(store.direction(2), Some(Direction::RuToUz));
    assert_eq!(store.direction(3), None);
}

#[test]
fn test_store_shouldBeSafeUnderConcurrentAccess() {
    use std::sync::Arc;

    let store = Arc::new(InMemorySessionStore::new());
    let mut handles = Vec::new();

    for user_id in 0..8i64 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            for _ in 0..100 {
                store.set_direction(user_id, Direction::UzToRu);
                assert_eq!(store.direction(user_id), Some(Direction::UzToRu));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_callbackData_shouldMatchButtonPayloads() {
    assert_eq!(Direction::UzToRu.callback_data(), "uz-ru");
    assert_eq!(Direction::RuToUz.callback_data(), "ru-uz");
}

#[test]
fn test_fromCallbackData_shouldRejectForeignPayloads() {
    assert_eq!(Direction::from_callback_data("uz-ru"), Some(Direction::UzToRu));
    assert_eq!(Direction::from_callback_data("ru-uz"), Some(Direction::RuToUz));
    assert_eq!(Direction::from_callback_data("uz-en"), None);
    assert_eq!(Direction::from_callback_data("start"), None);
}

#[test]
fn test_languagePair_shouldFollowFixedTable() {
    assert_eq!(Direction::UzToRu.language_pair(), ("uz", "ru"));
    assert_eq!(Direction::RuToUz.language_pair(), ("ru", "uz"));
}
