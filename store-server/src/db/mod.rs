//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend). Two collections: `category` and
//! `product`. Writes are document-atomic; the loose category reference on
//! products needs no cross-document transaction.

pub mod models;
pub mod repository;

use shared::error::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "storefront";
const DATABASE: &str = "catalog";

/// Open the on-disk database under the work directory
pub async fn connect(work_dir: &Path) -> Result<Surreal<Db>, AppError> {
    let db_path = work_dir.join("data/store.db");
    let db = Surreal::new::<RocksDb>(db_path)
        .await
        .map_err(|e| AppError::storage_unavailable(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::storage_unavailable(format!("Failed to select database: {e}")))?;

    init_schema(&db).await?;

    tracing::info!("Database connection established (SurrealDB RocksDB)");
    Ok(db)
}

/// Define indexes; shared with the in-memory test engine
pub async fn init_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query("DEFINE INDEX IF NOT EXISTS idx_category_name ON TABLE category FIELDS name UNIQUE")
        .await
        .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;
    Ok(())
}
