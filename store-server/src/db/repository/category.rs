//! Category Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::CategoryRecord;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>, op_timeout: Duration) -> Self {
        Self {
            base: BaseRepository::new(db, op_timeout),
        }
    }

    /// Find all categories (storage order; callers sort)
    pub async fn find_all(&self) -> RepoResult<Vec<CategoryRecord>> {
        self.base
            .run("category.find_all", async {
                let categories: Vec<CategoryRecord> =
                    self.base.db().query("SELECT * FROM category").await?.take(0)?;
                Ok(categories)
            })
            .await
    }

    /// Find category by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CategoryRecord>> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.base
            .run("category.find_by_id", async {
                let category: Option<CategoryRecord> =
                    self.base.db().select((TABLE, pure_id)).await?;
                Ok(category)
            })
            .await
    }

    /// Find category by name (case-sensitive exact match)
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<CategoryRecord>> {
        let name_owned = name.to_string();
        self.base
            .run("category.find_by_name", async {
                let mut result = self
                    .base
                    .db()
                    .query("SELECT * FROM category WHERE name = $name LIMIT 1")
                    .bind(("name", name_owned))
                    .await?;
                let categories: Vec<CategoryRecord> = result.take(0)?;
                Ok(categories.into_iter().next())
            })
            .await
    }

    /// Create a new category
    pub async fn create(&self, name: String) -> RepoResult<CategoryRecord> {
        // Check duplicate name
        if self.find_by_name(&name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                name
            )));
        }

        let category = CategoryRecord::new(name);
        self.base
            .run("category.create", async {
                let created: Option<CategoryRecord> =
                    self.base.db().create(TABLE).content(category).await?;
                created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
            })
            .await
    }

    /// Hard delete a category, refused while any product references it
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(TABLE, id);
        let cat_thing = make_thing(TABLE, pure_id);

        let referencing = self
            .base
            .run("category.count_products", async {
                let mut result = self
                    .base
                    .db()
                    .query("SELECT count() FROM product WHERE category = $cat GROUP ALL")
                    .bind(("cat", cat_thing.clone()))
                    .await?;
                let count: Option<i64> = result.take((0, "count"))?;
                Ok(count.unwrap_or(0))
            })
            .await?;

        if referencing > 0 {
            return Err(RepoError::Validation(
                "Cannot delete category with products".to_string(),
            ));
        }

        self.base
            .run("category.delete", async {
                let deleted: Option<CategoryRecord> =
                    self.base.db().delete((TABLE, pure_id)).await?;
                if deleted.is_none() {
                    return Err(RepoError::NotFound(format!("Category {} not found", id)));
                }
                Ok(())
            })
            .await
    }
}
