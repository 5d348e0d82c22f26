//! Integration tests for [`pr_storage::PrLogger`] over the embedded (SQLite) backend.
//!
//! Each test uses its own database file in a temp dir, so the schema setup runs on a fresh file.

use pr_storage::{BackendKind, PrLogger, SqlitePrStore, NO_PRS_FOUND};
use tempfile::TempDir;

async fn file_logger(dir: &TempDir) -> PrLogger {
    let path = dir.path().join("prlogger.db");
    let store = SqlitePrStore::new(path.to_str().unwrap())
        .await
        .expect("Failed to open SQLite store");
    PrLogger::new(store)
}

/// **Test: log then fetch lists the exact exercise/weight pair.**
#[tokio::test]
async fn test_log_then_fetch() {
    let dir = TempDir::new().unwrap();
    let logger = file_logger(&dir).await;
    assert_eq!(logger.backend_kind(), BackendKind::Embedded);

    let reply = logger.log_pr(1, "bench", 62.5).await.unwrap();
    assert_eq!(reply, "Logged your PR: bench - 62.5kg.");

    let listing = logger.fetch_prs(1).await.unwrap();
    assert!(listing.starts_with("bench: 62.5kg on "), "got {listing}");
}

/// **Test: fetch with no records returns the fixed message, never an empty string.**
#[tokio::test]
async fn test_fetch_empty() {
    let dir = TempDir::new().unwrap();
    let logger = file_logger(&dir).await;

    assert_eq!(logger.fetch_prs(1).await.unwrap(), NO_PRS_FOUND);
}

/// **Test: logging N records then fetching yields N lines.**
#[tokio::test]
async fn test_fetch_returns_one_line_per_record() {
    let dir = TempDir::new().unwrap();
    let logger = file_logger(&dir).await;

    for w in [40.0, 50.0, 60.0, 70.0, 80.0] {
        logger.log_pr(9, "row", w).await.unwrap();
    }

    let listing = logger.fetch_prs(9).await.unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("row: 40kg"));
    assert!(lines[4].starts_with("row: 80kg"));
}

/// **Test: delete with nothing logged returns "No PR found" and leaves storage unchanged.**
#[tokio::test]
async fn test_delete_not_found_leaves_storage_unchanged() {
    let dir = TempDir::new().unwrap();
    let logger = file_logger(&dir).await;
    logger.log_pr(1, "squat", 100.0).await.unwrap();

    let reply = logger.delete_pr(1, "bench").await.unwrap();
    assert_eq!(reply, "No PR found for bench.");

    let listing = logger.fetch_prs(1).await.unwrap();
    assert_eq!(listing.lines().count(), 1);
    assert!(listing.starts_with("squat: 100kg"));
}

/// **Test: alice logs bench 60 then 65, deletes bench; only the 60 kg entry remains.**
#[tokio::test]
async fn test_delete_removes_only_latest() {
    let dir = TempDir::new().unwrap();
    let logger = file_logger(&dir).await;
    let alice = 1001;
    let bob = 1002;

    logger.log_pr(alice, "bench", 60.0).await.unwrap();
    logger.log_pr(alice, "bench", 65.0).await.unwrap();
    logger.log_pr(bob, "bench", 65.0).await.unwrap();

    let reply = logger.delete_pr(alice, "bench").await.unwrap();
    assert_eq!(reply, "Deleted the latest PR for bench.");

    let listing = logger.fetch_prs(alice).await.unwrap();
    assert_eq!(listing.lines().count(), 1);
    assert!(listing.starts_with("bench: 60kg"), "got {listing}");

    let bob_listing = logger.fetch_prs(bob).await.unwrap();
    assert!(bob_listing.starts_with("bench: 65kg"));
}

/// **Test: leaderboard("squat") with bob:100, carol:120, dave:90 → carol, bob, dave.**
#[tokio::test]
async fn test_leaderboard_order() {
    let dir = TempDir::new().unwrap();
    let logger = file_logger(&dir).await;
    let (bob, carol, dave) = (2, 3, 4);

    logger.log_pr(bob, "squat", 100.0).await.unwrap();
    logger.log_pr(carol, "squat", 120.0).await.unwrap();
    logger.log_pr(dave, "squat", 90.0).await.unwrap();
    logger.log_pr(carol, "bench", 300.0).await.unwrap();

    let board = logger.fetch_leaderboard("squat").await.unwrap();
    let order: Vec<(i64, f64)> = board.iter().map(|e| (e.user_id, e.weight)).collect();
    assert_eq!(order, vec![(carol, 120.0), (bob, 100.0), (dave, 90.0)]);
}

/// **Test: leaderboard is truncated to 10 entries, heaviest first.**
#[tokio::test]
async fn test_leaderboard_truncated_to_ten() {
    let dir = TempDir::new().unwrap();
    let logger = file_logger(&dir).await;

    for user in 0..12 {
        logger
            .log_pr(user, "press", 40.0 + user as f64 * 2.5)
            .await
            .unwrap();
    }

    let board = logger.fetch_leaderboard("press").await.unwrap();
    assert_eq!(board.len(), 10);
    assert_eq!(board[0].user_id, 11);
    assert!(board.windows(2).all(|w| w[0].weight >= w[1].weight));
    assert!(board.iter().all(|e| e.user_id >= 2));
}

/// **Test: reopening the same file keeps earlier records (schema setup is idempotent).**
#[tokio::test]
async fn test_reopen_keeps_records() {
    let dir = TempDir::new().unwrap();
    {
        let logger = file_logger(&dir).await;
        logger.log_pr(5, "curl", 20.0).await.unwrap();
    }

    let logger = file_logger(&dir).await;
    let listing = logger.fetch_prs(5).await.unwrap();
    assert!(listing.starts_with("curl: 20kg"));
}
