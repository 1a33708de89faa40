use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db;
use crate::db::repository::{CategoryRepository, ProductRepository};
use shared::error::AppResult;

/// Server state: configuration plus the embedded database handle
///
/// Cloning is cheap; the database handle is internally shared.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Open the database under the configured work directory
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = db::connect(std::path::Path::new(&config.work_dir)).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }

    /// Wrap an already opened database (used by tests with the in-memory
    /// engine)
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    fn op_timeout(&self) -> Duration {
        Duration::from_millis(self.config.request_timeout_ms)
    }

    /// Category repository bound to this state's database and timeout
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.db.clone(), self.op_timeout())
    }

    /// Product repository bound to this state's database and timeout
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.db.clone(), self.op_timeout())
    }
}
