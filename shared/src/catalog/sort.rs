//! Catalog sort keys
//!
//! Every key sorts stably: ties keep their relative input order, and
//! `Featured` is the identity ordering.

use crate::models::ProductSummary;
use serde::{Deserialize, Serialize};

/// Deterministic total order over the filtered catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    RatingDesc,
    ReviewsDesc,
    #[default]
    Featured,
}

impl SortKey {
    /// Parse the `sortBy` query value; unknown values fall back to Featured
    pub fn parse(value: &str) -> Self {
        match value {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "rating-desc" => Self::RatingDesc,
            "reviews-desc" => Self::ReviewsDesc,
            _ => Self::Featured,
        }
    }
}

/// Sort in place; `Vec::sort_by` is stable, which carries the tie rule
pub fn sort_products(products: &mut [ProductSummary], key: SortKey) {
    match key {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::ReviewsDesc => products.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortKey::Featured => {}
    }
}
