//! Bot configuration: BaseConfig (Telegram + log) + StoreConfig (PR store backend).

mod base;
mod bot_config;
mod store;


pub use base::{log_file_from_env, BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use store::StoreConfig;
