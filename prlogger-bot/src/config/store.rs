//! PR store config: backend selection, SQLite location, Firestore connection.

use anyhow::Result;
use pr_storage::{BackendKind, FirestoreConfig};
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "./prlogger.db";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// PR_STORE_BACKEND; unknown or missing means embedded
    pub backend: BackendKind,
    /// DATABASE_URL
    pub database_url: String,
    /// FIRESTORE_PROJECT_ID
    pub firestore_project_id: Option<String>,
    /// FIRESTORE_ACCESS_TOKEN
    pub firestore_access_token: Option<String>,
    /// FIRESTORE_EMULATOR_HOST
    pub firestore_emulator_host: Option<String>,
    /// FIRESTORE_BASE_URL
    pub firestore_base_url: Option<String>,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let backend = non_empty_var("PR_STORE_BACKEND")
            .map(|v| BackendKind::parse(&v))
            .unwrap_or_default();
        let database_url =
            non_empty_var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            backend,
            database_url,
            firestore_project_id: non_empty_var("FIRESTORE_PROJECT_ID"),
            firestore_access_token: non_empty_var("FIRESTORE_ACCESS_TOKEN"),
            firestore_emulator_host: non_empty_var("FIRESTORE_EMULATOR_HOST"),
            firestore_base_url: non_empty_var("FIRESTORE_BASE_URL"),
        })
    }

    /// The document backend needs a project id; the base URL must parse if given.
    pub fn validate(&self) -> Result<()> {
        if self.backend == BackendKind::Document && self.firestore_project_id.is_none() {
            anyhow::bail!("PR_STORE_BACKEND=document requires FIRESTORE_PROJECT_ID");
        }
        if let Some(ref url_str) = self.firestore_base_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("FIRESTORE_BASE_URL is set but not a valid URL: {}", url_str);
            }
        }
        Ok(())
    }

    /// Firestore connection settings. FIRESTORE_BASE_URL wins over the emulator host.
    pub fn firestore_config(&self) -> Result<FirestoreConfig> {
        let project_id = self
            .firestore_project_id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("FIRESTORE_PROJECT_ID not set"))?;

        let mut config = match (&self.firestore_base_url, &self.firestore_emulator_host) {
            (Some(base_url), _) => FirestoreConfig::new(project_id).with_base_url(base_url.clone()),
            (None, Some(host)) => FirestoreConfig::for_emulator(project_id, host),
            (None, None) => FirestoreConfig::new(project_id),
        };
        if let Some(ref token) = self.firestore_access_token {
            config = config.with_access_token(token.clone());
        }
        Ok(config)
    }
}
