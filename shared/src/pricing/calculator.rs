//! Configuration Price Calculator
//!
//! Deterministic pure function from a Configuration to a quoted total.
//! Uses rust_decimal for the discount step; the result is rounded once,
//! half away from zero, to the integer currency unit.

use crate::models::Configuration;
use rust_decimal::prelude::*;

use super::options::{self, BASE_PRICE, DISCOUNT_PERCENT};

/// Price breakdown for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub base: i64,
    pub size_surcharge: i64,
    pub material_surcharge: i64,
    pub addon_total: i64,
    /// Sum of the above, before discount
    pub subtotal: i64,
    /// Percent taken off the subtotal
    pub discount_percent: u32,
    /// Discounted, rounded total
    pub total: i64,
}

/// Round to the integer currency unit, half away from zero
#[inline]
fn round_currency(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Quote a configuration against the fixed option tables
///
/// Referentially transparent: identical input always yields an identical
/// quote. Unknown option ids contribute 0 rather than failing.
pub fn quote(config: &Configuration) -> Quote {
    let size_surcharge = options::size_surcharge(&config.size_id);
    let material_surcharge = options::material_surcharge(&config.material_id);
    let addon_total: i64 = config
        .addon_ids
        .iter()
        .map(|id| options::addon_price(id))
        .sum();

    let subtotal = BASE_PRICE + size_surcharge + material_surcharge + addon_total;

    // Single rounding step on the discounted total; rounding per component
    // would drift across repeated partial computations.
    let discount_multiplier =
        Decimal::ONE - Decimal::from(DISCOUNT_PERCENT) / Decimal::ONE_HUNDRED;
    let total = round_currency(Decimal::from(subtotal) * discount_multiplier);

    Quote {
        base: BASE_PRICE,
        size_surcharge,
        material_surcharge,
        addon_total,
        subtotal,
        discount_percent: DISCOUNT_PERCENT,
        total,
    }
}

/// Final price only
pub fn price(config: &Configuration) -> i64 {
    quote(config).total
}
