//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored, augmented review record
///
/// Immutable after creation; the only lifecycle operation is deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub rating: u8,
    pub review_text: String,
    pub ai_response: String,
    pub ai_summary: String,
    pub recommended_action: String,
    pub created_at: DateTime<Utc>,
}

/// Fields of a record about to be created
///
/// Identity and creation timestamp are assigned by the store, not the
/// caller.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: u8,
    pub review_text: String,
    pub ai_response: String,
    pub ai_summary: String,
    pub recommended_action: String,
}
