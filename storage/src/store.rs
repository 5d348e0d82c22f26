//! The PR store contract.
//!
//! Backends implement four primitives (`insert_pr`, `delete_latest_pr`, `list_prs`, `top_prs`).
//! The user-facing operations (`log_pr`, `delete_pr`, `fetch_prs`, `fetch_leaderboard`) are provided
//! methods so both backends answer with exactly the same text.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{LeaderboardEntry, PrRecord};

/// Maximum number of rows returned by [`PrStore::fetch_leaderboard`].
pub const LEADERBOARD_SIZE: usize = 10;

/// Reply used by [`PrStore::fetch_prs`] when the user has no records.
pub const NO_PRS_FOUND: &str = "No PRs found.";

#[async_trait]
pub trait PrStore: Send + Sync {
    /// Inserts one record stamped with the current time and returns it.
    async fn insert_pr(&self, user_id: i64, exercise: &str, weight: f64) -> Result<PrRecord>;

    /// Removes the most recent record for `(user_id, exercise)` by its unique id.
    /// Returns the removed record, or `None` if there was nothing to remove.
    async fn delete_latest_pr(&self, user_id: i64, exercise: &str) -> Result<Option<PrRecord>>;

    /// All records owned by `user_id`, in the backend's natural order.
    async fn list_prs(&self, user_id: i64) -> Result<Vec<PrRecord>>;

    /// Heaviest entries for `exercise` across all users, weight descending, at most `limit`.
    async fn top_prs(&self, exercise: &str, limit: usize) -> Result<Vec<LeaderboardEntry>>;

    async fn log_pr(&self, user_id: i64, exercise: &str, weight: f64) -> Result<String> {
        let record = self.insert_pr(user_id, exercise, weight).await?;
        Ok(format!(
            "Logged your PR: {} - {}kg.",
            record.exercise, record.weight
        ))
    }

    async fn delete_pr(&self, user_id: i64, exercise: &str) -> Result<String> {
        Ok(match self.delete_latest_pr(user_id, exercise).await? {
            Some(_) => format!("Deleted the latest PR for {}.", exercise),
            None => format!("No PR found for {}.", exercise),
        })
    }

    /// One line per record; [`NO_PRS_FOUND`] instead of an empty string.
    async fn fetch_prs(&self, user_id: i64) -> Result<String> {
        let records = self.list_prs(user_id).await?;
        if records.is_empty() {
            return Ok(NO_PRS_FOUND.to_string());
        }
        Ok(records
            .iter()
            .map(PrRecord::listing_line)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    async fn fetch_leaderboard(&self, exercise: &str) -> Result<Vec<LeaderboardEntry>> {
        self.top_prs(exercise, LEADERBOARD_SIZE).await
    }
}
