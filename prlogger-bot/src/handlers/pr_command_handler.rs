//! Command dispatcher: turns chat commands into [`PrLogger`] calls and replies with plain text.

use std::sync::Arc;

use async_trait::async_trait;
use pr_storage::{LeaderboardEntry, PrLogger, StorageError};
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use super::command::{usage_reply, CommandParts, PrCommand, HELP_TEXT, WELCOME_TEXT};
use crate::core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};

pub const STORE_FAILURE: &str =
    "Something went wrong while talking to the PR store. Please try again later.";
pub const INDEX_MISSING: &str =
    "This command needs a Firestore index that is not built yet. Please try again later.";

/// Handles `/start`, `/help`, `/log`, `/delete`, `/view` and `/leaderboard`.
///
/// Argument and storage errors become text replies here, so a bad command never fails the chain.
/// Other text, unknown commands, and commands addressed to another bot are ignored.
pub struct PrCommandHandler {
    logger: Arc<PrLogger>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl PrCommandHandler {
    pub fn new(
        logger: Arc<PrLogger>,
        bot: Arc<dyn Bot>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            logger,
            bot,
            bot_username,
        }
    }

    /// Runs a parsed command for `user_id` and returns the reply text.
    pub async fn execute(&self, command: PrCommand, user_id: i64) -> String {
        let result = match command {
            PrCommand::Start => return WELCOME_TEXT.to_string(),
            PrCommand::Help => return HELP_TEXT.to_string(),
            PrCommand::Log { exercise, weight } => {
                self.logger.log_pr(user_id, &exercise, weight).await
            }
            PrCommand::Delete { exercise } => self.logger.delete_pr(user_id, &exercise).await,
            PrCommand::View => self
                .logger
                .fetch_prs(user_id)
                .await
                .map(|listing| format!("Your PRs:\n{}", listing)),
            PrCommand::Leaderboard { exercise } => self
                .logger
                .fetch_leaderboard(&exercise)
                .await
                .map(|entries| format_leaderboard(&exercise, &entries)),
        };

        result.unwrap_or_else(|e| {
            error!(error = %e, user_id, "PR store call failed");
            match e {
                StorageError::IndexRequired(_) => INDEX_MISSING.to_string(),
                _ => STORE_FAILURE.to_string(),
            }
        })
    }
}

/// `Leaderboard for squat:\n1. 3: 120kg\n2. 2: 100kg`, or a fixed line when nobody logged it.
pub fn format_leaderboard(exercise: &str, entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return format!("No entries for {} yet.", exercise);
    }
    let lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {}: {}kg", i + 1, e.user_id, e.weight))
        .collect();
    format!("Leaderboard for {}:\n{}", exercise, lines.join("\n"))
}

#[async_trait]
impl Handler for PrCommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(parts) = CommandParts::split(&message.content) else {
            return Ok(HandlerResponse::Ignore);
        };
        if !parts.is_addressed_to(self.bot_username.read().await.as_deref()) {
            return Ok(HandlerResponse::Ignore);
        }
        if message.user.id == 0 {
            warn!("Command without a sender, ignored");
            return Ok(HandlerResponse::Ignore);
        }

        let reply = match PrCommand::from_parts(&parts) {
            Ok(command) => {
                info!(command = ?command, "Executing command");
                self.execute(command, message.user.id).await
            }
            Err(HandlerError::UnknownCommand(name)) => {
                info!(command = %name, "Unknown command, ignored");
                return Ok(HandlerResponse::Ignore);
            }
            Err(e) => {
                info!(error = %e, "Rejected command arguments");
                usage_reply(&e).to_string()
            }
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_leaderboard() {
        let entries = vec![
            LeaderboardEntry {
                user_id: 3,
                weight: 120.0,
            },
            LeaderboardEntry {
                user_id: 2,
                weight: 102.5,
            },
        ];
        assert_eq!(
            format_leaderboard("squat", &entries),
            "Leaderboard for squat:\n1. 3: 120kg\n2. 2: 102.5kg"
        );
    }

    #[test]
    fn test_format_leaderboard_empty() {
        assert_eq!(format_leaderboard("squat", &[]), "No entries for squat yet.");
    }
}
