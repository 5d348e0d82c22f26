use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::client::FirestoreClient;
use super::collections::{FIELD_DATE, FIELD_EXERCISE, FIELD_WEIGHT, PRS, USERS};
use super::config::FirestoreConfig;
use super::document::{double_value, string_value};
use crate::error::Result;
use crate::models::{LeaderboardEntry, PrRecord};
use crate::store::PrStore;

/// [`PrStore`] backed by Firestore.
///
/// Deletion targets a document id, so two records with the same weight never collide.
/// The leaderboard is a collection-group query over every `prs` sub-collection; Firestore needs a
/// composite index on `(exercise ASC, weight DESC)` for it, and answers
/// [`crate::StorageError::IndexRequired`] until that index exists.
#[derive(Clone)]
pub struct FirestorePrStore {
    client: FirestoreClient,
}

impl FirestorePrStore {
    pub fn new(config: FirestoreConfig) -> Self {
        info!(project_id = %config.project_id, base_url = %config.base_url, "Using Firestore PR store");
        Self {
            client: FirestoreClient::new(config),
        }
    }

    /// `.../documents/users/{user_id}`
    fn user_doc(&self, user_id: i64) -> String {
        format!("{}/{}/{}", self.client.documents_root(), USERS, user_id)
    }
}

fn exercise_filter(exercise: &str) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": FIELD_EXERCISE },
            "op": "EQUAL",
            "value": string_value(exercise)
        }
    })
}

/// A document nobody can read is logged and left out, so it cannot hide the rest of a listing.
fn skip_malformed<T>(item: Result<T>) -> Option<T> {
    match item {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(error = %e, "Skipping unreadable PR document");
            None
        }
    }
}

fn order(field: &str, direction: &str) -> Value {
    json!({ "field": { "fieldPath": field }, "direction": direction })
}

#[async_trait]
impl PrStore for FirestorePrStore {
    #[instrument(skip(self))]
    async fn insert_pr(&self, user_id: i64, exercise: &str, weight: f64) -> Result<PrRecord> {
        let id = Uuid::new_v4().simple().to_string();
        let name = format!("{}/{}/{}", self.user_doc(user_id), PRS, id);

        let write = json!({
            "update": {
                "name": name,
                "fields": {
                    FIELD_EXERCISE: string_value(exercise),
                    FIELD_WEIGHT: double_value(weight)
                }
            },
            "updateTransforms": [
                { "fieldPath": FIELD_DATE, "setToServerValue": "REQUEST_TIME" }
            ],
            "currentDocument": { "exists": false }
        });

        let response = self.client.commit(vec![write]).await?;
        let created_at = response.server_timestamp()?;

        info!(id = %id, user_id, exercise = %exercise, weight, "Saved PR document");
        Ok(PrRecord {
            id,
            user_id,
            exercise: exercise.to_string(),
            weight,
            created_at,
        })
    }

    #[instrument(skip(self))]
    async fn delete_latest_pr(&self, user_id: i64, exercise: &str) -> Result<Option<PrRecord>> {
        let query = json!({
            "from": [{ "collectionId": PRS }],
            "where": exercise_filter(exercise),
            "orderBy": [order(FIELD_DATE, "DESCENDING"), order("__name__", "DESCENDING")],
            "limit": 1
        });

        let latest = self
            .client
            .run_query(&self.user_doc(user_id), query)
            .await?
            .into_iter()
            .next();

        let Some(latest) = latest else {
            info!(user_id, exercise = %exercise, "No PR document to delete");
            return Ok(None);
        };

        let name = latest.name.clone();
        let record = latest.into_record()?;
        self.client.delete(&name).await?;
        info!(name = %name, user_id, exercise = %exercise, "Deleted latest PR document");
        Ok(Some(record))
    }

    #[instrument(skip(self))]
    async fn list_prs(&self, user_id: i64) -> Result<Vec<PrRecord>> {
        let query = json!({
            "from": [{ "collectionId": PRS }],
            "orderBy": [order(FIELD_DATE, "ASCENDING")]
        });

        let docs = self.client.run_query(&self.user_doc(user_id), query).await?;
        info!(user_id, count = docs.len(), "Retrieved PR documents");
        Ok(docs
            .into_iter()
            .filter_map(|d| skip_malformed(d.into_record()))
            .collect())
    }

    #[instrument(skip(self))]
    async fn top_prs(&self, exercise: &str, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let query = json!({
            "from": [{ "collectionId": PRS, "allDescendants": true }],
            "where": exercise_filter(exercise),
            "orderBy": [order(FIELD_WEIGHT, "DESCENDING")],
            "limit": limit
        });

        let docs = self
            .client
            .run_query(&self.client.documents_root(), query)
            .await?;
        Ok(docs
            .into_iter()
            .filter_map(|d| skip_malformed(d.into_leaderboard_entry()))
            .collect())
    }
}
