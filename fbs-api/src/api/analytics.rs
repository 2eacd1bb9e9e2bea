//! Analytics API handler

use axum::{extract::State, routing::get, Json, Router};

use fbs_common::db::reviews;

use crate::error::ApiResult;
use crate::review::{compute_analytics, AnalyticsSummary};
use crate::AppState;

/// GET /api/analytics
///
/// Aggregates over every stored record on each call.
pub async fn get_analytics(State(state): State<AppState>) -> ApiResult<Json<AnalyticsSummary>> {
    let ratings = reviews::all_ratings(&state.db).await?;
    Ok(Json(compute_analytics(&ratings)))
}

/// Build analytics routes
pub fn analytics_routes() -> Router<AppState> {
    Router::new().route("/api/analytics", get(get_analytics))
}
