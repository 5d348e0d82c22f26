//! Storage crate: PR record persistence behind one contract.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – PrRecord, LeaderboardEntry
//! - [`store`] – PrStore trait (backend primitives + user-facing operations)
//! - [`sqlite_store`] – SqlitePrStore (embedded backend)
//! - [`firestore`] – FirestorePrStore (document backend)
//! - [`backend`] – BackendKind, StoreBackend
//! - [`pr_logger`] – PrLogger, the context that forwards to the active backend

mod backend;
mod error;
pub mod firestore;
mod models;
mod pr_logger;
mod sqlite_pool;
mod sqlite_store;
mod store;

#[cfg(test)]
mod sqlite_store_test;

pub use backend::{BackendKind, StoreBackend};
pub use error::{Result, StorageError};
pub use firestore::{FirestoreConfig, FirestorePrStore};
pub use models::{LeaderboardEntry, PrRecord, DATE_FORMAT};
pub use pr_logger::PrLogger;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqlitePrStore;
pub use store::{PrStore, LEADERBOARD_SIZE, NO_PRS_FOUND};
