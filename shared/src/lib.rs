//! Shared types for the storefront catalog service
//!
//! Common code used by both store-server and the storefront client:
//! data models, the unified error system, and the pure client-side
//! engines (catalog query, configuration pricing, comparison session).
//!
//! Everything in this crate is deterministic and free of I/O; all mutable
//! state lives in explicit session objects passed in by the caller.

pub mod catalog;
pub mod compare;
pub mod error;
pub mod models;
pub mod pricing;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use catalog::{CatalogFilter, CatalogPage, PriceRange, SortKey};
pub use compare::{CompareItem, CompareSession, QuotedConfiguration};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Category, Configuration, ProductDetail, ProductStatus, ProductSummary};
