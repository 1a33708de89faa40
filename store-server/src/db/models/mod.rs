//! Persistence Models
//!
//! Document shapes for the two collections (`category`, `product`).
//! Wire-level shapes live in `shared::models`; conversion happens in
//! `api::convert`.

pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
