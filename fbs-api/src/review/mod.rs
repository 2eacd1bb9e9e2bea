//! Submission augmentation pipeline
//!
//! Raw input flows: normalize → augment (three independent generation
//! outcomes, per-field fallback) → one stored record. Analytics reads
//! independently from the store.

pub mod analytics;
pub mod augment;
pub mod normalize;

pub use analytics::{compute_analytics, AnalyticsSummary};
pub use augment::{augment, AugmentedFields};
pub use normalize::{normalize, NormalizedSubmission, EMPTY_REVIEW_SENTINEL};
