//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity as exposed on the wire
///
/// `id` carries the record id in `category:xxx` form. `created_at` is the
/// storefront display date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}
