//! Firestore wire types and conversion into [`PrRecord`].
//!
//! Firestore wraps every field value in a typed object (`{"stringValue": "bench"}`), so fields are
//! kept as raw JSON and read through the helpers below.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::collections::{FIELD_DATE, FIELD_EXERCISE, FIELD_WEIGHT, PRS, USERS};
use crate::error::{Result, StorageError};
use crate::models::{LeaderboardEntry, PrRecord};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Document {
    /// Full resource name, `projects/.../documents/users/{uid}/prs/{id}`.
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    pub create_time: Option<String>,
}

/// One element of a `runQuery` response stream. Elements without `document` only carry progress info.
#[derive(Debug, Deserialize)]
pub(crate) struct RunQueryItem {
    pub document: Option<Document>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommitResponse {
    #[serde(default)]
    pub write_results: Vec<WriteResult>,
    pub commit_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WriteResult {
    #[serde(default)]
    pub transform_results: Vec<Value>,
}

impl CommitResponse {
    /// Server time applied to the first transform of the first write, falling back to the commit time.
    pub fn server_timestamp(&self) -> Result<DateTime<Utc>> {
        let transformed = self
            .write_results
            .first()
            .and_then(|w| w.transform_results.first())
            .and_then(|v| v.get("timestampValue"))
            .and_then(Value::as_str);

        match transformed.or(self.commit_time.as_deref()) {
            Some(ts) => parse_timestamp(ts),
            None => Err(StorageError::MalformedDocument(
                "commit response carries no timestamp".to_string(),
            )),
        }
    }
}

pub(crate) fn string_value(s: &str) -> Value {
    serde_json::json!({ "stringValue": s })
}

pub(crate) fn double_value(f: f64) -> Value {
    serde_json::json!({ "doubleValue": f })
}

fn parse_timestamp(ts: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::MalformedDocument(format!("bad timestamp {}: {}", ts, e)))
}

impl Document {
    /// Last path segment.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Owner id, taken from the `users/{uid}/prs/{id}` part of the name.
    pub fn owner_id(&self) -> Result<i64> {
        let segments: Vec<&str> = self.name.split('/').collect();
        segments
            .windows(4)
            .rev()
            .find(|w| w[0] == USERS && w[2] == PRS)
            .and_then(|w| w[1].parse().ok())
            .ok_or_else(|| self.malformed("name is not under users/{id}/prs"))
    }

    fn field(&self, key: &str) -> Result<&Value> {
        self.fields
            .get(key)
            .ok_or_else(|| self.malformed(&format!("missing field {}", key)))
    }

    pub fn exercise(&self) -> Result<String> {
        self.field(FIELD_EXERCISE)?
            .get("stringValue")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| self.malformed("exercise is not a string"))
    }

    /// Accepts `doubleValue`, `integerValue` (which Firestore sends as a string) and a numeric
    /// `stringValue`, the shape older clients wrote.
    pub fn weight(&self) -> Result<f64> {
        let value = self.field(FIELD_WEIGHT)?;
        if let Some(f) = value.get("doubleValue").and_then(Value::as_f64) {
            return Ok(f);
        }
        if let Some(i) = value.get("integerValue").and_then(|v| match v {
            Value::String(s) => s.parse::<i64>().ok(),
            other => other.as_i64(),
        }) {
            return Ok(i as f64);
        }
        value
            .get("stringValue")
            .and_then(Value::as_str)
            .and_then(|s| s.trim().replace(',', ".").parse::<f64>().ok())
            .filter(|f| f.is_finite())
            .ok_or_else(|| self.malformed("weight is not a number"))
    }

    /// The server-assigned `date`, or the document's create time if the field is absent.
    pub fn date(&self) -> Result<DateTime<Utc>> {
        let ts = self
            .fields
            .get(FIELD_DATE)
            .and_then(|v| v.get("timestampValue"))
            .and_then(Value::as_str)
            .or(self.create_time.as_deref())
            .ok_or_else(|| self.malformed("missing date"))?;
        parse_timestamp(ts)
    }

    pub fn into_record(self) -> Result<PrRecord> {
        Ok(PrRecord {
            id: self.id().to_string(),
            user_id: self.owner_id()?,
            exercise: self.exercise()?,
            weight: self.weight()?,
            created_at: self.date()?,
        })
    }

    pub fn into_leaderboard_entry(self) -> Result<LeaderboardEntry> {
        Ok(LeaderboardEntry {
            user_id: self.owner_id()?,
            weight: self.weight()?,
        })
    }

    fn malformed(&self, reason: &str) -> StorageError {
        StorageError::MalformedDocument(format!("{}: {}", self.name, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_document_into_record() {
        let d = doc(json!({
            "name": "projects/demo/databases/(default)/documents/users/42/prs/abc",
            "fields": {
                "exercise": {"stringValue": "bench"},
                "weight": {"doubleValue": 62.5},
                "date": {"timestampValue": "2024-05-01T18:30:00.123456Z"}
            },
            "createTime": "2024-05-01T18:30:00.123456Z"
        }));

        let record = d.into_record().unwrap();
        assert_eq!(record.id, "abc");
        assert_eq!(record.user_id, 42);
        assert_eq!(record.exercise, "bench");
        assert_eq!(record.weight, 62.5);
        assert_eq!(
            record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-05-01 18:30:00"
        );
    }

    #[test]
    fn test_integer_weight_is_accepted() {
        let d = doc(json!({
            "name": "projects/demo/databases/(default)/documents/users/7/prs/x",
            "fields": {"weight": {"integerValue": "100"}}
        }));
        assert_eq!(d.weight().unwrap(), 100.0);
    }

    #[test]
    fn test_text_weight_is_accepted_when_numeric() {
        let d = doc(json!({
            "name": "projects/demo/databases/(default)/documents/users/7/prs/x",
            "fields": {"weight": {"stringValue": "62.5"}}
        }));
        assert_eq!(d.weight().unwrap(), 62.5);

        let d = doc(json!({
            "name": "projects/demo/databases/(default)/documents/users/7/prs/y",
            "fields": {"weight": {"stringValue": "heavy"}}
        }));
        assert!(matches!(d.weight(), Err(StorageError::MalformedDocument(_))));
    }

    #[test]
    fn test_owner_id_rejects_foreign_path() {
        let d = doc(json!({
            "name": "projects/demo/databases/(default)/documents/teams/7/prs/x"
        }));
        assert!(matches!(d.owner_id(), Err(StorageError::MalformedDocument(_))));
    }

    #[test]
    fn test_missing_date_falls_back_to_create_time() {
        let d = doc(json!({
            "name": "projects/demo/databases/(default)/documents/users/7/prs/x",
            "fields": {},
            "createTime": "2024-01-02T03:04:05Z"
        }));
        assert_eq!(
            d.date().unwrap().format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-01-02 03:04:05"
        );
    }

    #[test]
    fn test_commit_response_prefers_transform_result() {
        let resp: CommitResponse = serde_json::from_value(json!({
            "writeResults": [{
                "updateTime": "2024-01-02T03:04:05Z",
                "transformResults": [{"timestampValue": "2024-01-02T03:04:05.5Z"}]
            }],
            "commitTime": "2024-01-02T03:04:06Z"
        }))
        .unwrap();
        let ts = resp.server_timestamp().unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 500);
    }
}
