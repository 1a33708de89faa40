//! Fixed option tables for build-your-own pricing
//!
//! One canonical table set (the customize-page variant): the default
//! queen/memory build carries no surcharge, larger sizes and premium
//! materials add on top of the base. All amounts are whole currency units.

/// Base price of every build
pub const BASE_PRICE: i64 = 899;

/// Flat promotional discount, percent of the subtotal
pub const DISCOUNT_PERCENT: u32 = 15;

/// A selectable option with a fixed surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedOption {
    pub id: &'static str,
    pub label: &'static str,
    pub surcharge: i64,
}

/// A cosmetic option that never prices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosmeticOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SIZES: &[PricedOption] = &[
    PricedOption { id: "twin", label: "Twin", surcharge: 0 },
    PricedOption { id: "full", label: "Full", surcharge: 0 },
    PricedOption { id: "queen", label: "Queen", surcharge: 0 },
    PricedOption { id: "king", label: "King", surcharge: 250 },
    PricedOption { id: "california-king", label: "California King", surcharge: 400 },
];

pub const MATERIALS: &[PricedOption] = &[
    PricedOption { id: "memory", label: "Memory Foam", surcharge: 0 },
    PricedOption { id: "innerspring", label: "Innerspring", surcharge: 0 },
    PricedOption { id: "latex", label: "Natural Latex", surcharge: 200 },
    PricedOption { id: "hybrid", label: "Hybrid", surcharge: 350 },
];

pub const ADDONS: &[PricedOption] = &[
    PricedOption { id: "cooling-gel", label: "Cooling Gel Layer", surcharge: 120 },
    PricedOption { id: "pillow-set", label: "Pillow Set", surcharge: 80 },
    PricedOption { id: "mattress-protector", label: "Mattress Protector", surcharge: 60 },
    PricedOption { id: "adjustable-base", label: "Adjustable Base", surcharge: 700 },
];

pub const COLORS: &[CosmeticOption] = &[
    CosmeticOption { id: "graphite", label: "Graphite" },
    CosmeticOption { id: "ivory", label: "Ivory" },
    CosmeticOption { id: "navy", label: "Navy" },
];

fn lookup(table: &[PricedOption], id: &str) -> i64 {
    table
        .iter()
        .find(|option| option.id == id)
        .map(|option| option.surcharge)
        .unwrap_or(0)
}

/// Size surcharge; unknown ids contribute 0 (fail-soft)
pub fn size_surcharge(size_id: &str) -> i64 {
    lookup(SIZES, size_id)
}

/// Material surcharge; unknown ids contribute 0 (fail-soft)
pub fn material_surcharge(material_id: &str) -> i64 {
    lookup(MATERIALS, material_id)
}

/// Add-on price; unknown ids contribute 0 (fail-soft)
pub fn addon_price(addon_id: &str) -> i64 {
    lookup(ADDONS, addon_id)
}
