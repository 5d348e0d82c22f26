//! Storage error types.
//!
//! Returned by both backends and by [`crate::PrLogger`]. "Nothing matched" is never an error here;
//! callers get `Ok(None)` / an empty listing instead.

use thiserror::Error;

/// Errors that can occur when talking to a PR store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Firestore returned {status}: {message}")]
    Firestore { status: u16, message: String },

    /// The query needs a composite index that has not been built yet.
    #[error("Missing Firestore index: {0}")]
    IndexRequired(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
