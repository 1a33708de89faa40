//! Product Repository
//!
//! Two read paths: the list projection never loads image bytes, the detail
//! read returns the full document. Writes are last-write-wins per id.

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{
    MAX_IMAGES, ProductCreate, ProductListRecord, ProductRecord, ProductUpdate,
};
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>, op_timeout: Duration) -> Self {
        Self {
            base: BaseRepository::new(db, op_timeout),
        }
    }

    /// List projection of all products; image bytes never leave the store
    pub async fn find_summaries(&self) -> RepoResult<Vec<ProductListRecord>> {
        self.base
            .run("product.find_summaries", async {
                let products: Vec<ProductListRecord> = self
                    .base
                    .db()
                    .query("SELECT * OMIT images FROM product")
                    .await?
                    .take(0)?;
                Ok(products)
            })
            .await
    }

    /// List projection of a single product
    pub async fn find_summary(&self, id: &str) -> RepoResult<Option<ProductListRecord>> {
        let thing = make_thing(TABLE, id);
        self.base
            .run("product.find_summary", async {
                let mut result = self
                    .base
                    .db()
                    .query("SELECT * OMIT images FROM product WHERE id = $id")
                    .bind(("id", thing))
                    .await?;
                let products: Vec<ProductListRecord> = result.take(0)?;
                Ok(products.into_iter().next())
            })
            .await
    }

    /// Full document including the image payload
    pub async fn find_detail(&self, id: &str) -> RepoResult<Option<ProductRecord>> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.base
            .run("product.find_detail", async {
                let product: Option<ProductRecord> =
                    self.base.db().select((TABLE, pure_id)).await?;
                Ok(product)
            })
            .await
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<ProductRecord> {
        if data.price < 0.0 || !data.price.is_finite() {
            return Err(RepoError::Validation("price must be non-negative".into()));
        }
        if data.images.len() > MAX_IMAGES {
            return Err(RepoError::Validation(format!(
                "at most {} images per product",
                MAX_IMAGES
            )));
        }

        let product = ProductRecord {
            id: None,
            name: data.name,
            category: data.category,
            marvel_category: data.marvel_category,
            description: data.description,
            features: data.features,
            price: data.price,
            status: data.status.unwrap_or_default(),
            views: 0,
            images: data.images,
            created_at: shared::util::now_millis(),
        };

        self.base
            .run("product.create", async {
                let created: Option<ProductRecord> =
                    self.base.db().create(TABLE).content(product).await?;
                created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
            })
            .await
    }

    /// Partial metadata update; a non-empty image list replaces the whole
    /// `images` sequence, an absent one leaves it untouched
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<ProductRecord> {
        if let Some(price) = data.price
            && (price < 0.0 || !price.is_finite())
        {
            return Err(RepoError::Validation("price must be non-negative".into()));
        }
        if let Some(ref images) = data.images
            && images.len() > MAX_IMAGES
        {
            return Err(RepoError::Validation(format!(
                "at most {} images per product",
                MAX_IMAGES
            )));
        }

        let pure_id = strip_table_prefix(TABLE, id);
        let thing = make_thing(TABLE, pure_id);

        // Build dynamic SET clauses with typed bindings
        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.category.is_some() {
            set_parts.push("category = $category");
        }
        if data.marvel_category.is_some() {
            set_parts.push("marvel_category = $marvel_category");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.features.is_some() {
            set_parts.push("features = $features");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.status.is_some() {
            set_parts.push("status = $status");
        }
        if data.images.is_some() {
            set_parts.push("images = $images");
        }

        if set_parts.is_empty() {
            // Nothing to change; still surface NotFound for a dangling id
            return self
                .find_detail(pure_id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        self.base
            .run("product.update", async {
                let mut query = self.base.db().query(&query_str).bind(("thing", thing));
                if let Some(v) = data.name {
                    query = query.bind(("name", v));
                }
                if let Some(v) = data.category {
                    query = query.bind(("category", v));
                }
                if let Some(v) = data.marvel_category {
                    query = query.bind(("marvel_category", v));
                }
                if let Some(v) = data.description {
                    query = query.bind(("description", v));
                }
                if let Some(v) = data.features {
                    query = query.bind(("features", v));
                }
                if let Some(v) = data.price {
                    query = query.bind(("price", v));
                }
                if let Some(v) = data.status {
                    query = query.bind(("status", v));
                }
                if let Some(v) = data.images {
                    query = query.bind(("images", v));
                }

                let mut result = query.await?;
                let products: Vec<ProductRecord> = result.take(0)?;
                products
                    .into_iter()
                    .next()
                    .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
            })
            .await
    }

    /// Hard delete; no cascade, no tombstone
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.base
            .run("product.delete", async {
                let deleted: Option<ProductRecord> =
                    self.base.db().delete((TABLE, pure_id)).await?;
                if deleted.is_none() {
                    return Err(RepoError::NotFound(format!("Product {} not found", id)));
                }
                Ok(())
            })
            .await
    }

    /// Bump the view counter (document-atomic)
    pub async fn increment_views(&self, id: &str) -> RepoResult<()> {
        let thing = make_thing(TABLE, id);
        self.base
            .run("product.increment_views", async {
                self.base
                    .db()
                    .query("UPDATE $thing SET views += 1")
                    .bind(("thing", thing))
                    .await?;
                Ok(())
            })
            .await
    }
}
