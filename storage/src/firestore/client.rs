//! Thin Firestore REST client: commit, runQuery, delete.

use reqwest::{Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, error};

use super::config::FirestoreConfig;
use super::document::{CommitResponse, Document, RunQueryItem};
use crate::error::{Result, StorageError};

#[derive(Clone)]
pub(crate) struct FirestoreClient {
    http: reqwest::Client,
    config: FirestoreConfig,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn documents_root(&self) -> String {
        self.config.documents_root()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.base_url, path);
        let builder = self.http.request(method, url);
        match &self.config.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Applies `writes` atomically.
    pub async fn commit(&self, writes: Vec<Value>) -> Result<CommitResponse> {
        let path = format!("{}:commit", self.documents_root());
        let resp = self
            .request(Method::POST, &path)
            .json(&serde_json::json!({ "writes": writes }))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Runs a structured query under `parent` (a document name or the documents root)
    /// and returns the matched documents in server order.
    pub async fn run_query(&self, parent: &str, structured_query: Value) -> Result<Vec<Document>> {
        let path = format!("{}:runQuery", parent);
        debug!(parent = %parent, query = %structured_query, "Firestore runQuery");
        let resp = self
            .request(Method::POST, &path)
            .json(&serde_json::json!({ "structuredQuery": structured_query }))
            .send()
            .await?;
        let items: Vec<RunQueryItem> = check(resp).await?.json().await?;
        Ok(items.into_iter().filter_map(|item| item.document).collect())
    }

    /// Deletes a document by its full resource name.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let resp = self.request(Method::DELETE, name).send().await?;
        check(resp).await?;
        Ok(())
    }
}

/// Turns a non-2xx answer into a [`StorageError`], reading Firestore's `{"error": {...}}` body.
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body: Value = resp.json().await.unwrap_or(Value::Null);
    let err = body.get("error");
    let message = err
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("no error message")
        .to_string();
    let kind = err
        .and_then(|e| e.get("status"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    error!(status = status.as_u16(), kind = %kind, message = %message, "Firestore request failed");

    if kind == "FAILED_PRECONDITION" && message.to_lowercase().contains("index") {
        return Err(StorageError::IndexRequired(message));
    }
    Err(StorageError::Firestore {
        status: status.as_u16(),
        message,
    })
}
