//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; `telegram::TelegramBotAdapter` implements it via teloxide,
//! tests substitute a recording mock.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::{Chat, Message};

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Replies in the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
