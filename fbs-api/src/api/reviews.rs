//! Review submission and management API handlers
//!
//! POST /api/reviews, GET /api/reviews, GET /api/reviews/:id,
//! DELETE /api/reviews/:id

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use fbs_common::db::models::{NewReview, Review};
use fbs_common::db::reviews;

use crate::error::ApiResult;
use crate::review::{augment, normalize};
use crate::AppState;

/// Default page size for listing
const DEFAULT_LIST_LIMIT: i64 = 100;
/// Upper bound on a single listing page
const MAX_LIST_LIMIT: i64 = 500;

/// POST /api/reviews request
#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    pub rating: i64,
    /// Absent or null text is treated as an empty review
    #[serde(default)]
    pub review_text: Option<String>,
}

/// GET /api/reviews query parameters
#[derive(Debug, Deserialize)]
pub struct ListReviewsQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// DELETE /api/reviews/:id response
#[derive(Debug, Serialize)]
pub struct DeleteReviewResponse {
    pub status: String,
}

/// POST /api/reviews
///
/// Validation failures reject the submission before any generation or
/// persistence work; past validation a record is always created, degraded
/// to fallback text where generation failed.
pub async fn submit_review(
    State(state): State<AppState>,
    Json(request): Json<SubmitReviewRequest>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let submission = normalize(request.rating, request.review_text.as_deref())?;

    let fields = augment(state.generator.as_ref(), &submission).await;

    let stored = reviews::insert_review(
        &state.db,
        NewReview {
            rating: submission.rating,
            review_text: submission.review_text,
            ai_response: fields.ai_response,
            ai_summary: fields.ai_summary,
            recommended_action: fields.recommended_action,
        },
    )
    .await?;

    info!(review_id = %stored.id, rating = stored.rating, "Review submitted");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/reviews
///
/// Newest first, with offset/limit pagination.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ListReviewsQuery>,
) -> ApiResult<Json<Vec<Review>>> {
    let offset = query.offset.unwrap_or(0).max(0);
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let records = reviews::list_reviews(&state.db, offset, limit).await?;
    Ok(Json(records))
}

/// GET /api/reviews/:id
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Review>> {
    let record = reviews::get_review(&state.db, id).await?;
    Ok(Json(record))
}

/// DELETE /api/reviews/:id
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteReviewResponse>> {
    reviews::delete_review(&state.db, id).await?;

    info!(review_id = %id, "Review deleted");

    Ok(Json(DeleteReviewResponse {
        status: "deleted".to_string(),
    }))
}

/// Build review management routes
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/api/reviews", post(submit_review))
        .route("/api/reviews", get(list_reviews))
        .route("/api/reviews/:id", get(get_review))
        .route("/api/reviews/:id", delete(delete_review))
}
