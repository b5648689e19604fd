/*!
 * Tests for Telegram Bot API models
 */

use serde_json::json;
use tarjimon::telegram::{
    InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, SendMessage, Update,
};

use crate::common::test_user;

#[test]
fn test_update_withTextMessage_shouldDeserialize() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 1001,
        "message": {
            "message_id": 7,
            "from": { "id": 42, "is_bot": false, "first_name": "Aziza" },
            "chat": { "id": 42, "type": "private" },
            "text": "salom"
        }
    }))
    .unwrap();

    assert_eq!(update.update_id, 1001);
    let message = update.message.unwrap();
    assert_eq!(message.message_id, 7);
    assert_eq!(message.chat.id, 42);
    assert_eq!(message.from.unwrap().first_name, "Aziza");
    assert_eq!(message.text.as_deref(), Some("salom"));
    assert!(update.callback_query.is_none());
}

#[test]
fn test_update_withCallbackQuery_shouldDeserialize() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 1002,
        "callback_query": {
            "id": "4382abc",
            "from": { "id": 42, "is_bot": false, "first_name": "Aziza" },
            "message": {
                "message_id": 8,
                "chat": { "id": 42, "type": "private" }
            },
            "data": "uz-ru"
        }
    }))
    .unwrap();

    let query = update.callback_query.unwrap();
    assert_eq!(query.id, "4382abc");
    assert_eq!(query.from.id, 42);
    assert_eq!(query.data.as_deref(), Some("uz-ru"));
    assert_eq!(query.message.unwrap().message_id, 8);
}

#[test]
fn test_update_withNonTextMessage_shouldLeaveTextAbsent() {
    // A sticker or photo message has no `text` field.
    let update: Update = serde_json::from_value(json!({
        "update_id": 1003,
        "message": {
            "message_id": 9,
            "from": { "id": 42, "is_bot": false, "first_name": "Aziza" },
            "chat": { "id": 42, "type": "private" }
        }
    }))
    .unwrap();

    assert!(update.message.unwrap().text.is_none());
}

#[test]
fn test_sendMessage_plain_shouldOmitOptionalFields() {
    let message = SendMessage::new(42, "salom");
    let value = serde_json::to_value(&message).unwrap();

    assert_eq!(value["chat_id"], 42);
    assert_eq!(value["text"], "salom");
    assert!(value.get("parse_mode").is_none());
    assert!(value.get("reply_markup").is_none());
}

#[test]
fn test_sendMessage_withKeyboardAndMode_shouldSerializeBoth() {
    let keyboard = InlineKeyboardMarkup {
        inline_keyboard: vec![vec![
            InlineKeyboardButton::callback("A -> B", "uz-ru"),
            InlineKeyboardButton::callback("B -> A", "ru-uz"),
        ]],
    };
    let message = SendMessage::new(42, "tanlang")
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard);
    let value = serde_json::to_value(&message).unwrap();

    assert_eq!(value["parse_mode"], "HTML");
    let buttons = &value["reply_markup"]["inline_keyboard"][0];
    assert_eq!(buttons[0]["callback_data"], "uz-ru");
    assert_eq!(buttons[1]["callback_data"], "ru-uz");
}

#[test]
fn test_mentionHtml_shouldEscapeName() {
    let user = test_user(42, "A<z&iza>");
    let mention = user.mention_html();
    assert_eq!(
        mention,
        "<a href=\"tg://user?id=42\">A&lt;z&amp;iza&gt;</a>"
    );
}
