//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::components::build_pr_logger;
use crate::config::{BotConfig, StoreConfig};
use crate::handlers::format_leaderboard;

#[derive(Parser)]
#[command(name = "prlogger")]
#[command(about = "Telegram bot for logging personal records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print a user's PRs from the configured store.
    View { user_id: i64 },
    /// Print the top lifts for an exercise from the configured store.
    Leaderboard { exercise: String },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Store-only config for the query subcommands; BOT_TOKEN is not needed.
async fn open_store() -> Result<pr_storage::PrLogger> {
    let store = StoreConfig::from_env()?;
    store.validate()?;
    build_pr_logger(&store).await
}

pub async fn view(user_id: i64) -> Result<String> {
    let logger = open_store().await?;
    Ok(logger.fetch_prs(user_id).await?)
}

pub async fn leaderboard(exercise: &str) -> Result<String> {
    let logger = open_store().await?;
    let entries = logger.fetch_leaderboard(exercise).await?;
    Ok(format_leaderboard(exercise, &entries))
}
