//! BotConfig: BaseConfig + StoreConfig. Use load() for env-based loading.

use anyhow::Result;
use pr_storage::BackendKind;

use super::{BaseConfig, StoreConfig};

pub struct BotConfig {
    pub base: BaseConfig,
    pub store: StoreConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let store = StoreConfig::from_env()?;
        Ok(Self { base, store })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.store.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn backend(&self) -> BackendKind {
        self.store.backend
    }
    pub fn database_url(&self) -> &str {
        &self.store.database_url
    }
}
