//! Build-your-own Configuration Model
//!
//! A configuration is ephemeral client state and is never persisted
//! server-side. Pricing is derived by the pricing engine from fixed option
//! tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Firmness scale bounds (1 = plush, 3 = firm)
pub const FIRMNESS_MIN: u8 = 1;
pub const FIRMNESS_MAX: u8 = 3;

/// One build-your-own selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub size_id: String,
    pub material_id: String,
    pub color_id: String,
    /// 1..=3
    pub firmness_level: u8,
    /// Set semantics: toggling the same add-on twice is a no-op
    #[serde(default)]
    pub addon_ids: BTreeSet<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            size_id: "queen".to_string(),
            material_id: "memory".to_string(),
            color_id: "graphite".to_string(),
            firmness_level: 2,
            addon_ids: BTreeSet::new(),
        }
    }
}

impl Configuration {
    /// Toggle an add-on: insert when absent, remove when present
    pub fn toggle_addon(&mut self, addon_id: &str) {
        if !self.addon_ids.remove(addon_id) {
            self.addon_ids.insert(addon_id.to_string());
        }
    }

    pub fn has_addon(&self, addon_id: &str) -> bool {
        self.addon_ids.contains(addon_id)
    }

    /// Clamp firmness into the supported scale
    pub fn set_firmness(&mut self, level: u8) {
        self.firmness_level = level.clamp(FIRMNESS_MIN, FIRMNESS_MAX);
    }
}
