//! Database initialization tests

use fbs_common::db::models::NewReview;
use fbs_common::db::{init_database, reviews};
use tempfile::tempdir;

#[tokio::test]
async fn test_init_creates_database_file_and_schema() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("nested").join("feedback.db");

    let pool = init_database(&db_path).await.unwrap();
    assert!(db_path.exists());

    // Schema is usable immediately
    let stored = reviews::insert_review(
        &pool,
        NewReview {
            rating: 4,
            review_text: "works".to_string(),
            ai_response: "r".to_string(),
            ai_summary: "s".to_string(),
            recommended_action: "a".to_string(),
        },
    )
    .await
    .unwrap();

    let fetched = reviews::get_review(&pool, stored.id).await.unwrap();
    assert_eq!(fetched.review_text, "works");
}

#[tokio::test]
async fn test_init_is_idempotent_and_preserves_data() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("feedback.db");

    let pool = init_database(&db_path).await.unwrap();
    let stored = reviews::insert_review(
        &pool,
        NewReview {
            rating: 5,
            review_text: "keep me".to_string(),
            ai_response: "r".to_string(),
            ai_summary: "s".to_string(),
            recommended_action: "a".to_string(),
        },
    )
    .await
    .unwrap();
    pool.close().await;

    // Reopening the same database must not lose records
    let pool = init_database(&db_path).await.unwrap();
    let fetched = reviews::get_review(&pool, stored.id).await.unwrap();
    assert_eq!(fetched.review_text, "keep me");
}
