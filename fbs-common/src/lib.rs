//! Shared foundation for the FBS (Feedback System) services
//!
//! Provides the common error type, configuration resolution, and the
//! review record store used by fbs-api.

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
