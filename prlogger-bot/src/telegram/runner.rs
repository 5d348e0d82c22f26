//! REPL runner: converts teloxide messages to core::Message and passes them to the HandlerChain.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// Calls get_me() first and stores the username in `bot_username`, so commands addressed to other
/// bots (`/log@otherbot`) can be told apart. Each message runs the chain in its own task; a failing
/// chain is logged and never stops polling.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => error!(error = %e, "get_me failed; addressed commands will not be filtered"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            if msg.text().is_none() {
                return Ok(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            Ok(())
        }
    })
    .await;
}
