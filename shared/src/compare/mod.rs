//! Comparison Session
//!
//! A bounded, client-held working set (at most 3 items) of either full
//! products or ad-hoc configurations, presented side-by-side. The two
//! surfaces observed different capacity behavior and that asymmetry is
//! kept: product comparisons reject adds at capacity, configuration
//! comparisons evict the oldest entry and append.

use crate::models::{Configuration, ProductSummary};
use crate::pricing::{self, Quote};

/// Maximum items in one comparison
pub const CAPACITY: usize = 3;

/// What happens when `add` is called on a full session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// The add is refused; the session is unchanged
    Reject,
    /// The oldest item is dropped and the new one appended
    EvictOldest,
}

/// Anything that can sit in a comparison column
pub trait CompareItem {
    fn compare_id(&self) -> &str;
    fn compare_price(&self) -> f64;
    /// Label/value pairs for the side-by-side table, top to bottom
    fn diff_rows(&self) -> Vec<(String, String)>;
}

/// One row of the side-by-side diff table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRow {
    pub label: String,
    /// One value per item, in session order
    pub values: Vec<String>,
}

/// Bounded comparison set
#[derive(Debug, Clone)]
pub struct CompareSession<T> {
    items: Vec<T>,
    policy: CapacityPolicy,
}

impl<T: CompareItem> CompareSession<T> {
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= CAPACITY
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Add an item; returns false when a full session rejects it
    ///
    /// An item with an id already in the session is refused regardless of
    /// policy (comparing something against itself is meaningless).
    pub fn add(&mut self, item: T) -> bool {
        if self
            .items
            .iter()
            .any(|existing| existing.compare_id() == item.compare_id())
        {
            return false;
        }
        if self.is_full() {
            match self.policy {
                CapacityPolicy::Reject => return false,
                CapacityPolicy::EvictOldest => {
                    self.items.remove(0);
                }
            }
        }
        self.items.push(item);
        true
    }

    /// Remove by id; always legal, an empty comparison is a valid state
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.compare_id() != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All items tied at the strictly lowest price
    ///
    /// Ties are all flagged; no arbitrary single pick.
    pub fn winners(&self) -> Vec<&T> {
        let Some(lowest) = self
            .items
            .iter()
            .map(|item| item.compare_price())
            .min_by(f64::total_cmp)
        else {
            return Vec::new();
        };
        self.items
            .iter()
            .filter(|item| item.compare_price() == lowest)
            .collect()
    }

    pub fn winner_ids(&self) -> Vec<String> {
        self.winners()
            .into_iter()
            .map(|item| item.compare_id().to_string())
            .collect()
    }

    /// Side-by-side table: union of row labels in first-seen order,
    /// one value per item ("-" where an item lacks the row)
    pub fn diff(&self) -> Vec<CompareRow> {
        let mut rows: Vec<CompareRow> = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            for (label, value) in item.diff_rows() {
                let position = match rows.iter().position(|row| row.label == label) {
                    Some(position) => position,
                    None => {
                        rows.push(CompareRow {
                            label,
                            values: vec!["-".to_string(); self.items.len()],
                        });
                        rows.len() - 1
                    }
                };
                rows[position].values[index] = value;
            }
        }
        rows
    }
}

// ===== Product comparison (admin compare surface) =====

impl CompareSession<ProductSummary> {
    /// Product comparisons refuse adds once full
    pub fn products() -> Self {
        Self::new(CapacityPolicy::Reject)
    }
}

impl CompareItem for ProductSummary {
    fn compare_id(&self) -> &str {
        &self.id
    }

    fn compare_price(&self) -> f64 {
        self.price
    }

    fn diff_rows(&self) -> Vec<(String, String)> {
        vec![
            ("Name".to_string(), self.name.clone()),
            ("Price".to_string(), format!("{:.2}", self.price)),
            ("Category".to_string(), self.category_name.clone()),
            ("Type".to_string(), self.marvel_category.clone()),
            ("Rating".to_string(), format!("{:.1}", self.rating)),
            ("Status".to_string(), self.status.as_str().to_string()),
        ]
    }
}

// ===== Configuration comparison (customize surface) =====

/// A configuration snapshot carrying its computed quote
#[derive(Debug, Clone, PartialEq)]
pub struct QuotedConfiguration {
    pub id: String,
    pub config: Configuration,
    pub quote: Quote,
}

impl QuotedConfiguration {
    pub fn new(id: impl Into<String>, config: Configuration) -> Self {
        let quote = pricing::quote(&config);
        Self {
            id: id.into(),
            config,
            quote,
        }
    }
}

impl CompareItem for QuotedConfiguration {
    fn compare_id(&self) -> &str {
        &self.id
    }

    fn compare_price(&self) -> f64 {
        self.quote.total as f64
    }

    fn diff_rows(&self) -> Vec<(String, String)> {
        let addons = if self.config.addon_ids.is_empty() {
            "None".to_string()
        } else {
            self.config
                .addon_ids
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        };
        vec![
            ("Size".to_string(), self.config.size_id.clone()),
            ("Material".to_string(), self.config.material_id.clone()),
            ("Firmness".to_string(), self.config.firmness_level.to_string()),
            ("Add-ons".to_string(), addons),
            ("Price".to_string(), self.quote.total.to_string()),
        ]
    }
}

impl CompareSession<QuotedConfiguration> {
    /// Configuration comparisons evict the oldest build once full,
    /// and start out holding a single default build
    pub fn configurations() -> Self {
        let mut session = Self::new(CapacityPolicy::EvictOldest);
        session.reset();
        session
    }

    /// Back to a single default-configuration item, not to zero
    pub fn reset(&mut self) {
        self.items.clear();
        self.items
            .push(QuotedConfiguration::new("build-1", Configuration::default()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;

    fn product(id: &str, price: f64) -> ProductSummary {
        ProductSummary {
            id: id.into(),
            name: id.to_uppercase(),
            category_id: String::new(),
            category_name: "Foam".into(),
            marvel_category: "Standard".into(),
            description: String::new(),
            features: vec![],
            price,
            status: ProductStatus::Active,
            views: 0,
            rating: 4.0,
            review_count: 3,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_product_session_rejects_past_capacity() {
        let mut session = CompareSession::products();
        assert!(session.add(product("a", 100.0)));
        assert!(session.add(product("b", 200.0)));
        assert!(session.add(product("c", 300.0)));
        assert!(session.is_full());

        assert!(!session.add(product("d", 50.0)));
        let ids: Vec<&str> = session.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_configuration_session_evicts_oldest() {
        let mut session = CompareSession::configurations();
        assert_eq!(session.len(), 1); // seeded with the default build

        session.add(QuotedConfiguration::new("build-2", Configuration::default()));
        session.add(QuotedConfiguration::new("build-3", Configuration::default()));
        assert!(session.is_full());

        assert!(session.add(QuotedConfiguration::new("build-4", Configuration::default())));
        let ids: Vec<&str> = session.items().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["build-2", "build-3", "build-4"]);
    }

    #[test]
    fn test_duplicate_id_is_refused() {
        let mut session = CompareSession::products();
        assert!(session.add(product("a", 100.0)));
        assert!(!session.add(product("a", 999.0)));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_remove_below_one_is_legal() {
        let mut session = CompareSession::products();
        session.add(product("a", 100.0));
        assert!(session.remove("a"));
        assert!(session.is_empty());
        assert!(!session.remove("a"));
        assert!(session.winners().is_empty());
    }

    #[test]
    fn test_single_winner_with_distinct_prices() {
        let mut session = CompareSession::products();
        session.add(product("a", 300.0));
        session.add(product("b", 100.0));
        session.add(product("c", 200.0));
        assert_eq!(session.winner_ids(), ["b"]);
    }

    #[test]
    fn test_all_tied_items_win() {
        let mut session = CompareSession::products();
        session.add(product("a", 150.0));
        session.add(product("b", 150.0));
        session.add(product("c", 600.0));
        assert_eq!(session.winner_ids(), ["a", "b"]);
    }

    #[test]
    fn test_reset_restores_single_default_build() {
        let mut session = CompareSession::configurations();
        session.add(QuotedConfiguration::new("build-2", Configuration::default()));
        session.reset();
        assert_eq!(session.len(), 1);
        assert_eq!(session.items()[0].config, Configuration::default());
    }

    #[test]
    fn test_diff_rows_align_across_items() {
        let mut session = CompareSession::products();
        session.add(product("a", 100.0));
        session.add(product("b", 250.0));

        let rows = session.diff();
        let price_row = rows.iter().find(|r| r.label == "Price").unwrap();
        assert_eq!(price_row.values, ["100.00", "250.00"]);
        for row in &rows {
            assert_eq!(row.values.len(), 2);
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every item tied at the lowest price is flagged a
            /// winner, and nothing else is.
            #[test]
            fn winners_are_exactly_the_lowest_priced(
                prices in prop::collection::vec(0u32..50, 1..=3)
            ) {
                let mut session = CompareSession::products();
                for (i, cents) in prices.iter().enumerate() {
                    session.add(product(&format!("p{}", i), *cents as f64));
                }

                let lowest = prices.iter().min().copied().unwrap() as f64;
                let expected: Vec<String> = prices
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| **p as f64 == lowest)
                    .map(|(i, _)| format!("p{}", i))
                    .collect();

                prop_assert_eq!(session.winner_ids(), expected);
            }

            /// Property: with strictly distinct prices there is exactly one
            /// winner.
            #[test]
            fn distinct_prices_give_exactly_one_winner(
                base in 0u32..1000,
            ) {
                let mut session = CompareSession::products();
                session.add(product("a", base as f64 + 2.0));
                session.add(product("b", base as f64));
                session.add(product("c", base as f64 + 1.0));
                prop_assert_eq!(session.winner_ids(), vec!["b".to_string()]);
            }
        }
    }
}
