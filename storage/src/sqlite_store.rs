//! Embedded backend: PR records in a single local SQLite file.
//!
//! One flat `prs` table. Every operation is one parameterized statement, except delete,
//! which looks up the latest row and then removes it by primary key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::{LeaderboardEntry, PrRecord};
use crate::sqlite_pool::SqlitePoolManager;
use crate::store::PrStore;

const PR_COLUMNS: &str = "id, user_id, exercise, weight, created_at";

#[derive(sqlx::FromRow)]
struct PrRow {
    id: i64,
    user_id: i64,
    exercise: String,
    weight: f64,
    created_at: DateTime<Utc>,
}

impl From<PrRow> for PrRecord {
    fn from(row: PrRow) -> Self {
        Self {
            id: row.id.to_string(),
            user_id: row.user_id,
            exercise: row.exercise,
            weight: row.weight,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct SqlitePrStore {
    pool_manager: SqlitePoolManager,
}

impl SqlitePrStore {
    /// Opens (or creates) the database and makes sure the schema exists.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &sqlx::SqlitePool {
        self.pool_manager.pool()
    }

    /// Idempotent; safe on every start.
    async fn init(&self) -> Result<()> {
        info!("Creating prs table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS prs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                exercise TEXT NOT NULL,
                weight REAL NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_prs_user_exercise ON prs(user_id, exercise);
            CREATE INDEX IF NOT EXISTS idx_prs_exercise_weight ON prs(exercise, weight);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl PrStore for SqlitePrStore {
    #[instrument(skip(self))]
    async fn insert_pr(&self, user_id: i64, exercise: &str, weight: f64) -> Result<PrRecord> {
        let sql = format!(
            "INSERT INTO prs (user_id, exercise, weight, created_at) VALUES (?, ?, ?, ?) RETURNING {}",
            PR_COLUMNS
        );
        let row: PrRow = sqlx::query_as(&sql)
            .bind(user_id)
            .bind(exercise)
            .bind(weight)
            .bind(Utc::now())
            .fetch_one(self.pool_manager.pool())
            .await?;

        info!(id = row.id, user_id, exercise = %exercise, weight, "Saved PR");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn delete_latest_pr(&self, user_id: i64, exercise: &str) -> Result<Option<PrRecord>> {
        let pool = self.pool_manager.pool();

        // Equal timestamps fall back to insertion order.
        let sql = format!(
            "SELECT {} FROM prs WHERE user_id = ? AND exercise = ? ORDER BY created_at DESC, id DESC LIMIT 1",
            PR_COLUMNS
        );
        let latest: Option<PrRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .bind(exercise)
            .fetch_optional(pool)
            .await?;

        let Some(latest) = latest else {
            info!(user_id, exercise = %exercise, "No PR to delete");
            return Ok(None);
        };

        sqlx::query("DELETE FROM prs WHERE id = ?")
            .bind(latest.id)
            .execute(pool)
            .await?;

        info!(id = latest.id, user_id, exercise = %exercise, "Deleted latest PR");
        Ok(Some(latest.into()))
    }

    #[instrument(skip(self))]
    async fn list_prs(&self, user_id: i64) -> Result<Vec<PrRecord>> {
        let sql = format!("SELECT {} FROM prs WHERE user_id = ? ORDER BY id", PR_COLUMNS);
        let rows: Vec<PrRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(self.pool_manager.pool())
            .await?;

        info!(user_id, count = rows.len(), "Retrieved PRs");
        Ok(rows.into_iter().map(PrRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn top_prs(&self, exercise: &str, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let rows: Vec<(i64, f64)> = sqlx::query_as(
            "SELECT user_id, weight FROM prs WHERE exercise = ? ORDER BY weight DESC, id ASC LIMIT ?",
        )
        .bind(exercise)
        .bind(limit as i64)
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, weight)| LeaderboardEntry { user_id, weight })
            .collect())
    }
}
