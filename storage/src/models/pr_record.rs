//! PR record model shared by both backends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format used when a record's timestamp is shown to a user.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged exercise attempt. Immutable once created; only deletion is supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrRecord {
    /// Unique identifier: SQLite row id as text, or the Firestore document id.
    pub id: String,
    pub user_id: i64,
    pub exercise: String,
    /// Kilograms.
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

impl PrRecord {
    /// Renders the record as one listing line, e.g. `bench: 62.5kg on 2024-05-01 18:30:00`.
    pub fn listing_line(&self) -> String {
        format!(
            "{}: {}kg on {}",
            self.exercise,
            self.weight,
            self.created_at.format(DATE_FORMAT)
        )
    }
}
