//! Pagination
//!
//! 1-indexed pages over an already filtered and sorted list. A shrinking
//! result set can strand the requested page past the end; the page is
//! clamped back into range so callers never receive a phantom empty page.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One page of catalog results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage<T> {
    pub items: Vec<T>,
    /// Total items across all pages (after filtering)
    pub total: u64,
    /// The page actually served (post-clamp)
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Slice one page out of the full result list
///
/// `page` is clamped to `[1, total_pages]`; an empty result set serves
/// page 1 with zero items, a valid state rather than an error.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> AppResult<CatalogPage<T>> {
    if page_size == 0 {
        return Err(AppError::invalid_request("pageSize must be greater than zero"));
    }

    let total = items.len() as u64;
    let total_pages = total.div_ceil(page_size as u64) as u32;
    let page = page.min(total_pages).max(1);

    let start = ((page - 1) * page_size) as usize;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Ok(CatalogPage {
        items,
        total,
        page,
        page_size,
        total_pages,
    })
}
