//! Shared configuration, error handling, and extractors for CareBridge
//!
//! This crate provides common functionality used across the CareBridge API:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Request extractors that turn malformed input into 400 responses
//! - User identifier validation

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod ids;

pub use db::RepositoryError;
pub use error::{Error, Result, UNEXPECTED_ERROR_MESSAGE};
pub use extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
pub use ids::{is_valid_user_id, validate_user_id};
