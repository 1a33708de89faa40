//! Configuration Pricing Engine
//!
//! Prices a build-your-own selection (size x material x add-ons) against
//! fixed option tables, applies the flat promotional discount, and rounds
//! once to the integer currency unit.

mod calculator;
pub mod options;

pub use calculator::{Quote, price, quote};
pub use options::{ADDONS, BASE_PRICE, COLORS, DISCOUNT_PERCENT, MATERIALS, SIZES};
