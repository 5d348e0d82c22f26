use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_telegram_handler_chain};
use crate::config::BotConfig;
use crate::telegram::run_repl;

/// Main entry: validate config, open the PR store, then run the REPL until shutdown.
/// Tracing must already be initialized.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    info!(
        backend = %config.backend(),
        database_url = %config.database_url(),
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_telegram_handler_chain(&components);

    info!("Bot started successfully");

    run_repl(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot_username.clone(),
    )
    .await;

    info!("Bot stopped");
    Ok(())
}
