//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB document store.
//! Every operation runs under a bounded timeout; storage failures surface
//! as distinct errors and are never retried here.

pub mod category;
pub mod product;

pub use category::CategoryRepository;
pub use product::ProductRepository;

use shared::error::{AppError, ErrorCode};
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Timed out: {0}")]
    Timeout(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Unavailable(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => {
                AppError::with_message(ErrorCode::ValidationFailed, msg)
            }
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Unavailable(msg) => AppError::storage_unavailable(msg),
            RepoError::Timeout(msg) => AppError::timeout(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Extract the bare id from a "table:id" string when the prefix matches
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((tb, rest)) if tb == table => rest,
        _ => id,
    }
}

/// Build a record pointer, tolerating ids that already carry the prefix
pub fn make_thing(table: &str, id: &str) -> Thing {
    let pure_id = strip_table_prefix(table, id);
    Thing::from((table.to_string(), pure_id.to_string()))
}

/// Base repository with database reference and per-operation timeout
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
    op_timeout: Duration,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>, op_timeout: Duration) -> Self {
        Self { db, op_timeout }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Run a storage operation under the configured timeout
    ///
    /// Elapse maps to a distinguishable timeout error; the in-flight write
    /// is left to complete on the storage side (cancellation is advisory).
    pub async fn run<T, F>(&self, op: &str, fut: F) -> RepoResult<T>
    where
        F: Future<Output = RepoResult<T>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(RepoError::Timeout(format!(
                "{} exceeded {}ms",
                op,
                self.op_timeout.as_millis()
            ))),
        }
    }
}
