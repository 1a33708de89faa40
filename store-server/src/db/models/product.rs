//! Product Records
//!
//! Document shapes for the product collection. Image bytes live inside the
//! document; the list projection (`ProductListRecord`) is deserialized from
//! `SELECT * OMIT images` so image payloads never travel on list queries.

use serde::{Deserialize, Serialize};
use shared::models::ProductStatus;
use surrealdb::sql::Thing;

pub type ProductId = Thing;

/// Maximum images one product may own
pub const MAX_IMAGES: usize = 5;

/// One embedded binary image asset: raw bytes plus content type,
/// stored verbatim (no resizing or transcoding)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Full product document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: Option<ProductId>,
    pub name: String,
    /// Record link to category
    pub category: Thing,
    /// Free-form secondary classification tag
    pub marvel_category: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub images: Vec<ImageRecord>,
    #[serde(default)]
    pub created_at: i64,
}

/// List projection of a product (no image payload)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListRecord {
    pub id: Option<ProductId>,
    pub name: String,
    pub category: Thing,
    pub marvel_category: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub created_at: i64,
}

/// Create product payload (already validated by the API layer)
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub category: Thing,
    pub marvel_category: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: f64,
    pub status: Option<ProductStatus>,
    pub images: Vec<ImageRecord>,
}

/// Update product payload. Unset fields keep their prior value;
/// `images` replaces the whole sequence when non-empty
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<Thing>,
    pub marvel_category: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<f64>,
    pub status: Option<ProductStatus>,
    pub images: Option<Vec<ImageRecord>>,
}
