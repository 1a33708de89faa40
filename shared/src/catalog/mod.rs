//! Catalog Query Engine
//!
//! Pure, stateless transforms over an already-fetched product list:
//! search, multi-filter, sort, paginate. Recomputed in full on every
//! change; the catalog is assumed to fit in memory. No operation here
//! errors for "no results"; an empty page is a valid, representable value.

mod filter;
mod page;
mod sort;

pub use filter::{ALL, CatalogFilter, PriceRange};
pub use page::{CatalogPage, paginate};
pub use sort::{SortKey, sort_products};

use crate::error::AppResult;
use crate::models::ProductSummary;

/// Run the full pipeline: filter -> sort -> paginate
pub fn run(
    products: &[ProductSummary],
    filter: &CatalogFilter,
    sort: SortKey,
    page: u32,
    page_size: u32,
) -> AppResult<CatalogPage<ProductSummary>> {
    let mut matched: Vec<ProductSummary> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();
    sort_products(&mut matched, sort);
    paginate(matched, page, page_size)
}
