//! Catalog Query Handler
//!
//! Runs the pure catalog engine server-side over the summary projection.
//! The full pipeline recomputes per request; the catalog is bounded.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::convert;
use crate::core::ServerState;
use shared::catalog::{self, CatalogFilter, CatalogPage, PriceRange, SortKey};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::ProductSummary;

const DEFAULT_PAGE_SIZE: u32 = 6;

/// GET /api/catalog query parameters
///
/// `priceRanges` is comma-separated `min-max` bands; an empty max means
/// unbounded (`"4000-"`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub marvel_category: Option<String>,
    pub price_ranges: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Parse one `min-max` band
fn parse_range(raw: &str) -> AppResult<PriceRange> {
    let invalid = || {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("invalid price range '{}', expected 'min-max' or 'min-'", raw),
        )
    };

    let (min_raw, max_raw) = raw.split_once('-').ok_or_else(invalid)?;
    let min: f64 = min_raw.trim().parse().map_err(|_| invalid())?;
    let max = match max_raw.trim() {
        "" => None,
        value => Some(value.parse().map_err(|_| invalid())?),
    };
    Ok(PriceRange::new(min, max))
}

fn parse_ranges(raw: &str) -> AppResult<Vec<PriceRange>> {
    raw.split(',')
        .map(str::trim)
        .filter(|band| !band.is_empty())
        .map(parse_range)
        .collect()
}

impl CatalogParams {
    fn filter(&self) -> AppResult<CatalogFilter> {
        let mut filter = CatalogFilter::default();
        if let Some(ref search) = self.search {
            filter.search = search.clone();
        }
        if let Some(ref category) = self.category {
            filter.category = category.clone();
        }
        if let Some(ref marvel_category) = self.marvel_category {
            filter.marvel_category = marvel_category.clone();
        }
        if let Some(ref ranges) = self.price_ranges {
            filter.price_ranges = parse_ranges(ranges)?;
        }
        Ok(filter)
    }
}

/// GET /api/catalog - filtered, sorted, paginated summaries
pub async fn query(
    State(state): State<ServerState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<Json<CatalogPage<ProductSummary>>> {
    let filter = params.filter()?;
    let sort = SortKey::parse(params.sort_by.as_deref().unwrap_or(""));
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    let categories = state.categories().find_all().await?;
    let names = convert::category_name_map(&categories);

    let summaries: Vec<ProductSummary> = state
        .products()
        .find_summaries()
        .await?
        .into_iter()
        .map(|record| convert::summary_from(record, &names))
        .collect();

    let result = catalog::run(&summaries, &filter, sort, page, page_size)?;
    Ok(Json(result))
}
