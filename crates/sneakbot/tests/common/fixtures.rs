//! Test fixtures
//!
//! Messages are built from Bot API JSON, the same shape Telegram sends.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;
use sneakcore::BotConfig;
use teloxide::types::Message;
use url::Url;

pub const TEST_CHAT_ID: i64 = 123456789;
pub const TEST_USER_ID: u64 = 123456789;

pub fn launch_url() -> Url {
    Url::parse("https://sneakdog.test/templates/game.html").unwrap()
}

pub fn test_config() -> Arc<BotConfig> {
    Arc::new(BotConfig::new("123456:TEST_TOKEN", launch_url()))
}

/// /start sent by a user in a private chat
pub fn private_start_message() -> Message {
    let raw = json!({
        "message_id": 1,
        "date": 1700000000,
        "chat": {"id": TEST_CHAT_ID, "type": "private", "first_name": "Rex", "username": "rex"},
        "from": {"id": TEST_USER_ID, "is_bot": false, "first_name": "Rex", "username": "rex"},
        "text": "/start",
        "entities": [{"type": "bot_command", "offset": 0, "length": 6}]
    });
    serde_json::from_str(&raw.to_string()).unwrap()
}

/// /start posted in a channel: there is no `from`
pub fn channel_start_message() -> Message {
    let raw = json!({
        "message_id": 2,
        "date": 1700000000,
        "chat": {"id": -1001234567890i64, "type": "channel", "title": "Dog Park"},
        "sender_chat": {"id": -1001234567890i64, "type": "channel", "title": "Dog Park"},
        "text": "/start",
        "entities": [{"type": "bot_command", "offset": 0, "length": 6}]
    });
    serde_json::from_str(&raw.to_string()).unwrap()
}
