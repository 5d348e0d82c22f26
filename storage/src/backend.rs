//! Backend selection: which [`PrStore`] implementation is active.

use std::fmt;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::firestore::FirestorePrStore;
use crate::models::{LeaderboardEntry, PrRecord};
use crate::sqlite_store::SqlitePrStore;
use crate::store::PrStore;

/// Configured backend kind. Unknown or missing values fall back to [`BackendKind::Embedded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Embedded,
    Document,
}

impl BackendKind {
    /// Parses `embedded`/`sqlite` and `document`/`firestore`, case-insensitively.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "embedded" | "sqlite" => Self::Embedded,
            "document" | "firestore" => Self::Document,
            other => {
                warn!(value = %other, "Unknown PR store backend, falling back to embedded");
                Self::Embedded
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Embedded => "embedded",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one active store, chosen at startup.
#[derive(Clone)]
pub enum StoreBackend {
    Embedded(SqlitePrStore),
    Document(FirestorePrStore),
}

impl StoreBackend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Embedded(_) => BackendKind::Embedded,
            Self::Document(_) => BackendKind::Document,
        }
    }
}

impl From<SqlitePrStore> for StoreBackend {
    fn from(store: SqlitePrStore) -> Self {
        Self::Embedded(store)
    }
}

impl From<FirestorePrStore> for StoreBackend {
    fn from(store: FirestorePrStore) -> Self {
        Self::Document(store)
    }
}

#[async_trait]
impl PrStore for StoreBackend {
    async fn insert_pr(&self, user_id: i64, exercise: &str, weight: f64) -> Result<PrRecord> {
        match self {
            Self::Embedded(s) => s.insert_pr(user_id, exercise, weight).await,
            Self::Document(s) => s.insert_pr(user_id, exercise, weight).await,
        }
    }

    async fn delete_latest_pr(&self, user_id: i64, exercise: &str) -> Result<Option<PrRecord>> {
        match self {
            Self::Embedded(s) => s.delete_latest_pr(user_id, exercise).await,
            Self::Document(s) => s.delete_latest_pr(user_id, exercise).await,
        }
    }

    async fn list_prs(&self, user_id: i64) -> Result<Vec<PrRecord>> {
        match self {
            Self::Embedded(s) => s.list_prs(user_id).await,
            Self::Document(s) => s.list_prs(user_id).await,
        }
    }

    async fn top_prs(&self, exercise: &str, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        match self {
            Self::Embedded(s) => s.top_prs(exercise, limit).await,
            Self::Document(s) => s.top_prs(exercise, limit).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(BackendKind::parse("embedded"), BackendKind::Embedded);
        assert_eq!(BackendKind::parse("SQLite"), BackendKind::Embedded);
        assert_eq!(BackendKind::parse("document"), BackendKind::Document);
        assert_eq!(BackendKind::parse(" Firestore "), BackendKind::Document);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_embedded() {
        assert_eq!(BackendKind::parse(""), BackendKind::Embedded);
        assert_eq!(BackendKind::parse("postgres"), BackendKind::Embedded);
    }

    #[test]
    fn test_display() {
        assert_eq!(BackendKind::Document.to_string(), "document");
        assert_eq!(BackendKind::default().to_string(), "embedded");
    }
}
