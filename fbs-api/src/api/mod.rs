//! HTTP API handlers for fbs-api

pub mod analytics;
pub mod health;
pub mod reviews;

pub use analytics::analytics_routes;
pub use health::health_routes;
pub use reviews::review_routes;
