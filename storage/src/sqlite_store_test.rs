//! Unit tests for SqlitePrStore.
//!
//! Covers the backend primitives against an in-memory database.

use crate::sqlite_store::SqlitePrStore;
use crate::store::PrStore;

async fn memory_store() -> SqlitePrStore {
    SqlitePrStore::new("sqlite::memory:")
        .await
        .expect("Failed to create store")
}

#[tokio::test]
async fn test_insert_pr_returns_stored_record() {
    let store = memory_store().await;

    let record = store
        .insert_pr(1, "bench", 60.0)
        .await
        .expect("Failed to insert PR");

    assert_eq!(record.user_id, 1);
    assert_eq!(record.exercise, "bench");
    assert_eq!(record.weight, 60.0);
    assert!(!record.id.is_empty());
}

#[tokio::test]
async fn test_insert_pr_accepts_empty_exercise() {
    let store = memory_store().await;

    store.insert_pr(1, "", 0.0).await.expect("Failed to insert PR");

    let records = store.list_prs(1).await.expect("Failed to list PRs");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exercise, "");
}

#[tokio::test]
async fn test_list_prs_keeps_storage_order_and_owner() {
    let store = memory_store().await;

    store.insert_pr(1, "bench", 60.0).await.unwrap();
    store.insert_pr(2, "bench", 200.0).await.unwrap();
    store.insert_pr(1, "squat", 100.0).await.unwrap();

    let records = store.list_prs(1).await.expect("Failed to list PRs");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].exercise, "bench");
    assert_eq!(records[1].exercise, "squat");
    assert!(records.iter().all(|r| r.user_id == 1));
}

#[tokio::test]
async fn test_delete_latest_pr_empty() {
    let store = memory_store().await;

    let deleted = store
        .delete_latest_pr(1, "bench")
        .await
        .expect("Failed to delete");

    assert!(deleted.is_none());
}

#[tokio::test]
async fn test_delete_latest_pr_with_duplicate_weights_removes_one_row() {
    let store = memory_store().await;

    store.insert_pr(1, "bench", 60.0).await.unwrap();
    let second = store.insert_pr(1, "bench", 60.0).await.unwrap();

    let deleted = store
        .delete_latest_pr(1, "bench")
        .await
        .expect("Failed to delete")
        .expect("Expected a deleted record");

    assert_eq!(deleted.id, second.id);
    let remaining = store.list_prs(1).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].weight, 60.0);
}

#[tokio::test]
async fn test_top_prs_respects_limit() {
    let store = memory_store().await;

    for i in 0..5 {
        store.insert_pr(i, "deadlift", 100.0 + i as f64).await.unwrap();
    }

    let top = store.top_prs("deadlift", 3).await.expect("Failed to query");

    assert_eq!(top.len(), 3);
    assert_eq!(top[0].user_id, 4);
    assert_eq!(top[2].user_id, 2);
}

#[tokio::test]
async fn test_delete_latest_pr_equal_timestamps_removes_higher_id() {
    let store = memory_store().await;
    let created_at = chrono::Utc::now();

    for weight in [60.0, 65.0] {
        sqlx::query("INSERT INTO prs (user_id, exercise, weight, created_at) VALUES (?, ?, ?, ?)")
            .bind(1_i64)
            .bind("bench")
            .bind(weight)
            .bind(created_at)
            .execute(store.pool())
            .await
            .expect("Failed to insert row");
    }

    let deleted = store
        .delete_latest_pr(1, "bench")
        .await
        .expect("Failed to delete PR")
        .expect("Expected a deleted record");
    assert_eq!(deleted.weight, 65.0);

    let remaining = store.list_prs(1).await.expect("Failed to list PRs");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].weight, 60.0);
    assert_eq!(remaining[0].created_at, deleted.created_at);
}
