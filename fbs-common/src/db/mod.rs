//! Database models and queries

pub mod init;
pub mod models;
pub mod reviews;

pub use init::*;
pub use models::*;
