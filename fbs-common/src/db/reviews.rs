//! Review record store
//!
//! All persisted-record operations live here: one INSERT per record
//! creation, newest-first listing, lookup and deletion by id, and the
//! full-table reads backing analytics.

use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::db::models::{NewReview, Review};
use crate::{Error, Result};

/// Insert a new review record, assigning its id and creation timestamp
pub async fn insert_review(pool: &SqlitePool, new: NewReview) -> Result<Review> {
    let review = Review {
        id: Uuid::new_v4(),
        rating: new.rating,
        review_text: new.review_text,
        ai_response: new.ai_response,
        ai_summary: new.ai_summary,
        recommended_action: new.recommended_action,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO reviews (
            id, rating, review_text, ai_response, ai_summary,
            recommended_action, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(review.id.to_string())
    .bind(review.rating as i64)
    .bind(&review.review_text)
    .bind(&review.ai_response)
    .bind(&review.ai_summary)
    .bind(&review.recommended_action)
    .bind(review.created_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(review)
}

/// List reviews newest first, with offset/limit pagination
pub async fn list_reviews(pool: &SqlitePool, offset: i64, limit: i64) -> Result<Vec<Review>> {
    let rows = sqlx::query(
        r#"
        SELECT id, rating, review_text, ai_response, ai_summary,
               recommended_action, created_at
        FROM reviews
        ORDER BY created_at DESC, rowid DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    rows.iter().map(review_from_row).collect()
}

/// Fetch a single review by id
pub async fn get_review(pool: &SqlitePool, id: Uuid) -> Result<Review> {
    let row = sqlx::query(
        r#"
        SELECT id, rating, review_text, ai_response, ai_summary,
               recommended_action, created_at
        FROM reviews
        WHERE id = ?
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => review_from_row(&row),
        None => Err(Error::NotFound(format!("Review {} does not exist", id))),
    }
}

/// Delete a review by id
pub async fn delete_review(pool: &SqlitePool, id: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Review {} does not exist", id)));
    }

    Ok(())
}

/// All ratings in the store, for analytics aggregation
pub async fn all_ratings(pool: &SqlitePool) -> Result<Vec<u8>> {
    let rows: Vec<(i64,)> = sqlx::query_as("SELECT rating FROM reviews")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(r,)| r as u8).collect())
}

/// Map a database row to a Review
fn review_from_row(row: &SqliteRow) -> Result<Review> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| Error::Internal(format!("Malformed review id '{}': {}", id, e)))?;

    let created_at: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| Error::Internal(format!("Malformed created_at '{}': {}", created_at, e)))?
        .with_timezone(&Utc);

    let rating: i64 = row.try_get("rating")?;

    Ok(Review {
        id,
        rating: rating as u8,
        review_text: row.try_get("review_text")?,
        ai_response: row.try_get("ai_response")?,
        ai_summary: row.try_get("ai_summary")?,
        recommended_action: row.try_get("recommended_action")?,
        created_at,
    })
}
