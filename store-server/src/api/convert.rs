//! Conversion Module
//!
//! Turns persistence records (db::models) into wire shapes (shared::models).
//! This is the single normalization boundary: everything past it sees fully
//! populated, typed values, and binary assets only ever cross as base64
//! data URIs.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::collections::HashMap;

use crate::db::models::{CategoryRecord, ImageRecord, ProductListRecord, ProductRecord};
use shared::models::{Category, ProductDetail, ProductSummary, UNKNOWN_CATEGORY};
use shared::util::format_date;

// ============ Helpers ============

pub fn thing_to_string(thing: &surrealdb::sql::Thing) -> String {
    thing.to_string()
}

pub fn option_thing_to_string(thing: &Option<surrealdb::sql::Thing>) -> String {
    thing.as_ref().map(thing_to_string).unwrap_or_default()
}

/// Encode an embedded image as a `data:<mime>;base64,<bytes>` URI
pub fn image_to_data_uri(image: &ImageRecord) -> String {
    format!(
        "data:{};base64,{}",
        image.content_type,
        STANDARD.encode(&image.data)
    )
}

/// Resolve a category link against the id -> name map, falling back to
/// "Unknown" for dangling references
fn resolve_category_name(
    category: &surrealdb::sql::Thing,
    categories: &HashMap<String, String>,
) -> String {
    categories
        .get(&thing_to_string(category))
        .cloned()
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
}

/// Build the id -> name lookup from category records
pub fn category_name_map(categories: &[CategoryRecord]) -> HashMap<String, String> {
    categories
        .iter()
        .filter_map(|c| {
            c.id.as_ref()
                .map(|id| (thing_to_string(id), c.name.clone()))
        })
        .collect()
}

// ============ Category ============

impl From<CategoryRecord> for Category {
    fn from(c: CategoryRecord) -> Self {
        Self {
            id: option_thing_to_string(&c.id),
            name: c.name,
            created_at: format_date(c.created_at),
        }
    }
}

// ============ Product ============

pub fn summary_from(
    record: ProductListRecord,
    categories: &HashMap<String, String>,
) -> ProductSummary {
    ProductSummary {
        id: option_thing_to_string(&record.id),
        name: record.name,
        category_id: thing_to_string(&record.category),
        category_name: resolve_category_name(&record.category, categories),
        marvel_category: record.marvel_category,
        description: record.description,
        features: record.features,
        price: record.price,
        status: record.status,
        views: record.views,
        rating: 0.0,
        review_count: 0,
        created_at: format_date(record.created_at),
    }
}

pub fn detail_from(
    record: ProductRecord,
    categories: &HashMap<String, String>,
) -> ProductDetail {
    ProductDetail {
        id: option_thing_to_string(&record.id),
        name: record.name,
        category_id: thing_to_string(&record.category),
        category_name: resolve_category_name(&record.category, categories),
        marvel_category: record.marvel_category,
        description: record.description,
        features: record.features,
        price: record.price,
        status: record.status,
        views: record.views,
        rating: 0.0,
        review_count: 0,
        images: record.images.iter().map(image_to_data_uri).collect(),
        created_at: format_date(record.created_at),
    }
}
