//! Product Models
//!
//! Wire-level product shapes. The backend returns loosely-typed records;
//! every field here carries an exhaustive serde default so the rest of the
//! system only ever sees fully-populated values.

use serde::{Deserialize, Serialize};

/// Sentinel shown when a product owns no images
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Display name used when a product references a missing category
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Product lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown product status: {}", other)),
        }
    }
}

/// Catalog list projection of a product; never carries image payloads
///
/// Image bytes are fetched only on single-item detail requests; list
/// responses stay small regardless of how many photos a product owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category_id: String,
    /// Resolved category display name; "Unknown" when the reference dangles
    #[serde(default = "default_category_name")]
    pub category_name: String,
    #[serde(default)]
    pub marvel_category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i64,
    #[serde(default)]
    pub created_at: String,
}

fn default_category_name() -> String {
    UNKNOWN_CATEGORY.to_string()
}

/// Detail projection: summary fields plus the full image payload
///
/// Each image crosses the boundary as a `data:<mime>;base64,<bytes>` URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default = "default_category_name")]
    pub category_name: String,
    #[serde(default)]
    pub marvel_category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

impl ProductDetail {
    /// Canonical primary image: `images[0]` when present, else the placeholder
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Drop the image payload, keeping the list projection
    pub fn into_summary(self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            category_name: self.category_name,
            marvel_category: self.marvel_category,
            description: self.description,
            features: self.features,
            price: self.price,
            status: self.status,
            views: self.views,
            rating: self.rating,
            review_count: self.review_count,
            created_at: self.created_at,
        }
    }
}
