//! Category Record

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub type CategoryId = Thing;

/// Category document as persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: Option<CategoryId>,
    /// Unique, case-sensitive display name
    pub name: String,
    /// Epoch milliseconds
    #[serde(default)]
    pub created_at: i64,
}

impl CategoryRecord {
    pub fn new(name: String) -> Self {
        Self {
            id: None,
            name,
            created_at: shared::util::now_millis(),
        }
    }
}
