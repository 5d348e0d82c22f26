//! Mock implementation of [`prlogger_bot::Bot`] for integration tests.
//!
//! Records every sent message so tests can assert on the reply text without hitting Telegram.

use async_trait::async_trait;
use prlogger_bot::{Bot, Chat, Result};
use std::sync::{Arc, Mutex};

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_text(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|r| r.text.clone())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}
