//! Data models
//!
//! Shared between store-server and the storefront client (via API).
//! Persistence-side document types live in store-server; these are the
//! fully-typed shapes the rest of the system consumes.

pub mod category;
pub mod configuration;
pub mod product;

// Re-exports
pub use category::*;
pub use configuration::*;
pub use product::*;
