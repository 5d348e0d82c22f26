//! Document backend: PR records in Cloud Firestore, via the v1 REST API.
//!
//! Layout is `users/{user_id}/prs/{doc_id}`; each document holds `exercise`, `weight`, and a
//! server-assigned `date`.

mod client;
mod config;
mod document;
mod store;

pub use config::FirestoreConfig;
pub use store::FirestorePrStore;

/// Collection and field names.
pub mod collections {
    pub const USERS: &str = "users";
    pub const PRS: &str = "prs";

    pub const FIELD_EXERCISE: &str = "exercise";
    pub const FIELD_WEIGHT: &str = "weight";
    pub const FIELD_DATE: &str = "date";
}
