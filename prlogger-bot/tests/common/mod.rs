pub mod mock_bot;

use chrono::Utc;
use prlogger_bot::{Chat, Message, User};

/// A private-chat text message from `user_id`.
#[allow(dead_code)]
pub fn create_test_message(user_id: i64, content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: user_id,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
    }
}
