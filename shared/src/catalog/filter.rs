//! Catalog filters
//!
//! Four independent filter axes combined with AND. Each axis has an
//! "everything matches" rest state so an empty filter passes the whole
//! catalog through.

use crate::models::ProductSummary;
use serde::{Deserialize, Serialize};

/// Sentinel matching every category / classification
pub const ALL: &str = "All";

/// Half-open price band `[min, max)`; `max = None` means unbounded
///
/// The upper bound is exclusive so that adjoining bands never double-count
/// a boundary price ("Under 2500" does not include 2500).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }
}

/// Active filter selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    /// Case-insensitive substring against name OR description
    #[serde(default)]
    pub search: String,
    /// Category display name, or "All"
    #[serde(default = "default_all")]
    pub category: String,
    /// Secondary classification, or "All"
    #[serde(default = "default_all")]
    pub marvel_category: String,
    /// OR across bands; empty selection matches everything
    #[serde(default)]
    pub price_ranges: Vec<PriceRange>,
}

fn default_all() -> String {
    ALL.to_string()
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_all(),
            marvel_category: default_all(),
            price_ranges: Vec::new(),
        }
    }
}

impl CatalogFilter {
    pub fn matches_search(&self, product: &ProductSummary) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    pub fn matches_category(&self, product: &ProductSummary) -> bool {
        self.category == ALL || product.category_name == self.category
    }

    pub fn matches_classification(&self, product: &ProductSummary) -> bool {
        self.marvel_category == ALL || product.marvel_category == self.marvel_category
    }

    pub fn matches_price(&self, product: &ProductSummary) -> bool {
        self.price_ranges.is_empty()
            || self.price_ranges.iter().any(|r| r.contains(product.price))
    }

    /// AND-composition of the four axes
    pub fn matches(&self, product: &ProductSummary) -> bool {
        self.matches_search(product)
            && self.matches_category(product)
            && self.matches_classification(product)
            && self.matches_price(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;

    fn product(name: &str, description: &str, category: &str, class: &str, price: f64) -> ProductSummary {
        ProductSummary {
            id: format!("product:{}", name.to_lowercase().replace(' ', "-")),
            name: name.into(),
            category_id: "category:x".into(),
            category_name: category.into(),
            marvel_category: class.into(),
            description: description.into(),
            features: vec![],
            price,
            status: ProductStatus::Active,
            views: 0,
            rating: 0.0,
            review_count: 0,
            created_at: "2026-01-01".into(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = CatalogFilter::default();
        let p = product("Aurora", "plush hybrid", "Hybrid", "Premium", 1500.0);
        assert!(filter.matches(&p));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_or_description() {
        let p = product("Aurora Deluxe", "cooling GEL layers", "Hybrid", "Premium", 1500.0);

        let mut filter = CatalogFilter::default();
        filter.search = "aurora".into();
        assert!(filter.matches_search(&p));

        filter.search = "GeL".into();
        assert!(filter.matches_search(&p));

        filter.search = "latex".into();
        assert!(!filter.matches_search(&p));
    }

    #[test]
    fn test_category_exact_or_all() {
        let p = product("Aurora", "", "Hybrid", "Premium", 1500.0);

        let mut filter = CatalogFilter::default();
        assert!(filter.matches_category(&p));

        filter.category = "Hybrid".into();
        assert!(filter.matches_category(&p));

        // Exact match only, no case folding
        filter.category = "hybrid".into();
        assert!(!filter.matches_category(&p));
    }

    #[test]
    fn test_price_ranges_or_semantics() {
        let p = product("Aurora", "", "Hybrid", "Premium", 3000.0);

        let mut filter = CatalogFilter::default();
        filter.price_ranges = vec![
            PriceRange::new(0.0, Some(2500.0)),
            PriceRange::new(4000.0, None),
        ];
        assert!(!filter.matches_price(&p));

        filter.price_ranges.push(PriceRange::new(2500.0, Some(4000.0)));
        assert!(filter.matches_price(&p));
    }

    #[test]
    fn test_upper_bound_is_exclusive() {
        // 2500 exactly must NOT match "Under 2500"
        let under_2500 = PriceRange::new(0.0, Some(2500.0));
        assert!(under_2500.contains(2499.99));
        assert!(!under_2500.contains(2500.0));

        // ...and belongs to the adjoining band instead
        let next_band = PriceRange::new(2500.0, Some(4000.0));
        assert!(next_band.contains(2500.0));
    }

    #[test]
    fn test_composition_is_conjunction_of_axes() {
        let products = [
            product("Aurora", "gel foam", "Hybrid", "Premium", 1500.0),
            product("Basalt", "firm latex", "Latex", "Premium", 2800.0),
            product("Cirrus", "plush gel", "Hybrid", "Budget", 900.0),
        ];

        let mut filter = CatalogFilter::default();
        filter.search = "gel".into();
        filter.category = "Hybrid".into();
        filter.marvel_category = "Premium".into();
        filter.price_ranges = vec![PriceRange::new(1000.0, Some(2500.0))];

        for p in &products {
            let expected = filter.matches_search(p)
                && filter.matches_category(p)
                && filter.matches_classification(p)
                && filter.matches_price(p);
            assert_eq!(filter.matches(p), expected, "axis composition broke for {}", p.name);
        }
        assert!(filter.matches(&products[0]));
        assert!(!filter.matches(&products[1]));
        assert!(!filter.matches(&products[2]));
    }
}
