//! Utility Module
//!
//! Logging setup plus re-exports of the shared error types.

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
