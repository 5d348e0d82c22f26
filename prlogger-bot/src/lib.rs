//! # PR logger bot
//!
//! Telegram bot that records personal records (exercise + weight) per user and ranks them.
//! Wires the handler chain, the Telegram adapters, and the `pr-storage` backends. Loads config
//! from env and runs the REPL.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerError, HandlerResponse, Message, Result,
    ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};

pub use config::{log_file_from_env, BaseConfig, BotConfig, StoreConfig};
pub use runner::run_bot;

pub use components::{
    build_bot_components, build_handler_chain, build_pr_logger, build_telegram_handler_chain,
    BotComponents,
};
pub use handlers::{LoggingHandler, PrCommand, PrCommandHandler};
