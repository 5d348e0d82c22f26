//! Logger context: the single entry point the command layer talks to.

use crate::backend::{BackendKind, StoreBackend};
use crate::error::Result;
use crate::models::LeaderboardEntry;
use crate::store::PrStore;

/// Holds the active backend and forwards every call to it unchanged.
///
/// Built once at startup and shared (e.g. behind an `Arc`) with whatever runs the command loop.
#[derive(Clone)]
pub struct PrLogger {
    backend: StoreBackend,
}

impl PrLogger {
    pub fn new(backend: impl Into<StoreBackend>) -> Self {
        Self {
            backend: backend.into(),
        }
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub async fn log_pr(&self, user_id: i64, exercise: &str, weight: f64) -> Result<String> {
        self.backend.log_pr(user_id, exercise, weight).await
    }

    pub async fn delete_pr(&self, user_id: i64, exercise: &str) -> Result<String> {
        self.backend.delete_pr(user_id, exercise).await
    }

    pub async fn fetch_prs(&self, user_id: i64) -> Result<String> {
        self.backend.fetch_prs(user_id).await
    }

    pub async fn fetch_leaderboard(&self, exercise: &str) -> Result<Vec<LeaderboardEntry>> {
        self.backend.fetch_leaderboard(exercise).await
    }
}
