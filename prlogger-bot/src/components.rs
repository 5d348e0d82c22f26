//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use pr_storage::{BackendKind, FirestorePrStore, PrLogger, SqlitePrStore};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::{BotConfig, StoreConfig};
use crate::core::Bot as CoreBot;
use crate::handlers::{LoggingHandler, PrCommandHandler};
use crate::telegram::TelegramBotAdapter;

/// Everything run_bot needs: the PR store context, the teloxide bot, and the shared bot username.
pub struct BotComponents {
    pub logger: Arc<PrLogger>,
    pub teloxide_bot: Bot,
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

/// Opens the configured PR store. The SQLite schema is created on first open.
#[instrument(skip(config), fields(backend = %config.backend))]
pub async fn build_pr_logger(config: &StoreConfig) -> Result<PrLogger> {
    let logger = match config.backend {
        BackendKind::Embedded => {
            info!(database_url = %config.database_url, "Using embedded SQLite PR store");
            let store = SqlitePrStore::new(&config.database_url).await.map_err(|e| {
                error!(
                    error = %e,
                    database_url = %config.database_url,
                    "Failed to initialize PR storage"
                );
                anyhow::anyhow!("Failed to initialize PR storage: {}", e)
            })?;
            PrLogger::new(store)
        }
        BackendKind::Document => {
            let firestore = config.firestore_config()?;
            info!(
                project_id = %firestore.project_id,
                base_url = %firestore.base_url,
                "Using Firestore PR store"
            );
            PrLogger::new(FirestorePrStore::new(firestore))
        }
    };
    Ok(logger)
}

/// Builds the teloxide bot, pointing it at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let logger = Arc::new(build_pr_logger(config.store()).await?);
    let teloxide_bot = build_teloxide_bot(config);
    let bot_username = Arc::new(tokio::sync::RwLock::new(None));

    Ok(BotComponents {
        logger,
        teloxide_bot,
        bot_username,
    })
}

/// Builds the handler chain (logging → PR commands). `bot` sends the replies.
pub fn build_handler_chain(
    logger: Arc<PrLogger>,
    bot: Arc<dyn CoreBot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(PrCommandHandler::new(logger, bot, bot_username)))
}

/// Handler chain for the live bot: replies go out through teloxide.
pub fn build_telegram_handler_chain(components: &BotComponents) -> HandlerChain {
    let bot_adapter: Arc<dyn CoreBot> =
        Arc::new(TelegramBotAdapter::new(components.teloxide_bot.clone()));
    build_handler_chain(
        components.logger.clone(),
        bot_adapter,
        components.bot_username.clone(),
    )
}
