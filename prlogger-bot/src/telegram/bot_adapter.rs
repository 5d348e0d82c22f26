//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};
use tracing::error;

use crate::core::{Bot as CoreBot, BotError, Chat, Result};

pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| {
                error!(chat_id = chat.id, error = %e, "Failed to send reply");
                BotError::Bot(e.to_string())
            })?;
        Ok(())
    }
}
