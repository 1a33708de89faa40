//! Product API Handlers
//!
//! Admin writes arrive as multipart forms: text fields plus up to 5 image
//! parts. Image bytes are validated, then stored verbatim inside the
//! product document.

use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use std::str::FromStr;

use crate::api::convert;
use crate::core::ServerState;
use crate::db::models::{ImageRecord, MAX_IMAGES, ProductCreate, ProductUpdate};
use crate::db::repository::{RepoError, make_thing};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ProductDetail, ProductStatus, ProductSummary};

/// Maximum size per uploaded image (5MB)
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

// =============================================================================
// Multipart form
// =============================================================================

/// Collected admin form fields before validation
#[derive(Debug, Default)]
struct ProductForm {
    product_name: Option<String>,
    price: Option<String>,
    category: Option<String>,
    marvel_category: Option<String>,
    description: Option<String>,
    status: Option<String>,
    features: Vec<String>,
    images: Vec<ImageRecord>,
}

impl ProductForm {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "productName" => self.product_name = Some(value),
            "price" => self.price = Some(value),
            "category" => self.category = Some(value),
            "marvelCategory" => self.marvel_category = Some(value),
            "description" => self.description = Some(value),
            "status" => self.status = Some(value),
            // Repeated field, order preserved
            "features" => self.features.push(value),
            // Unknown fields from older admin builds are ignored
            _ => {}
        }
    }

    fn add_image(&mut self, image: ImageRecord) -> AppResult<()> {
        if self.images.len() >= MAX_IMAGES {
            return Err(AppError::with_message(
                ErrorCode::ImageLimitExceeded,
                format!("at most {} images per product", MAX_IMAGES),
            ));
        }
        self.images.push(image);
        Ok(())
    }

    fn parse_price(raw: &str) -> AppResult<f64> {
        let price: f64 = raw.trim().parse().map_err(|_| {
            AppError::with_message(ErrorCode::InvalidFormat, "price must be a number")
        })?;
        if price < 0.0 || !price.is_finite() {
            return Err(AppError::out_of_range("price must be non-negative"));
        }
        Ok(price)
    }

    fn parse_status(raw: &str) -> AppResult<ProductStatus> {
        ProductStatus::from_str(raw.trim()).map_err(|_| {
            AppError::with_message(ErrorCode::InvalidFormat, "status must be Active or Inactive")
        })
    }

    /// Validate for create: every admin field is required
    fn into_create(self) -> AppResult<ProductCreate> {
        let required = |value: Option<String>, field: &str| -> AppResult<String> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(AppError::required_field(field)),
            }
        };

        let name = required(self.product_name, "productName")?;
        let price = Self::parse_price(&required(self.price, "price")?)?;
        let category = required(self.category, "category")?;
        let marvel_category = required(self.marvel_category, "marvelCategory")?;
        let description = required(self.description, "description")?;
        let status = self
            .status
            .filter(|s| !s.trim().is_empty())
            .map(|s| Self::parse_status(&s))
            .transpose()?;

        Ok(ProductCreate {
            name,
            category: make_thing("category", &category),
            marvel_category,
            description,
            features: self.features,
            price,
            status,
            images: self.images,
        })
    }

    /// Validate for update: fields are individually optional, and a blank
    /// field means "keep the prior value"
    fn into_update(self) -> AppResult<ProductUpdate> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let price = non_blank(self.price)
            .map(|raw| Self::parse_price(&raw))
            .transpose()?;
        let status = non_blank(self.status)
            .map(|s| Self::parse_status(&s))
            .transpose()?;

        Ok(ProductUpdate {
            name: non_blank(self.product_name),
            category: non_blank(self.category).map(|c| make_thing("category", &c)),
            marvel_category: non_blank(self.marvel_category),
            description: non_blank(self.description),
            features: if self.features.is_empty() {
                None
            } else {
                Some(self.features)
            },
            price,
            status,
            // Empty upload list means "keep the existing images"
            images: if self.images.is_empty() {
                None
            } else {
                Some(self.images)
            },
        })
    }
}

/// Reject empty, oversized, or undecodable image payloads
fn validate_image(data: &[u8]) -> AppResult<()> {
    if data.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyFile));
    }
    if data.len() > MAX_IMAGE_BYTES {
        return Err(AppError::with_message(
            ErrorCode::FileTooLarge,
            format!("image exceeds {} bytes", MAX_IMAGE_BYTES),
        ));
    }
    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::with_message(
            ErrorCode::InvalidImageFile,
            format!("invalid image: {}", e),
        ));
    }
    Ok(())
}

/// Drain the multipart stream into a ProductForm
async fn read_form(mut multipart: Multipart) -> AppResult<ProductForm> {
    let mut form = ProductForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {}", e)))?
    {
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };

        if name == "images" {
            let content_type = field.content_type().map(|s| s.to_string());
            let filename = field.file_name().map(|s| s.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?
                .to_vec();

            validate_image(&data)?;

            // Prefer the declared content type, fall back to the filename
            let content_type = content_type.unwrap_or_else(|| {
                filename
                    .as_deref()
                    .map(|f| mime_guess::from_path(f).first_or_octet_stream().to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string())
            });

            form.add_image(ImageRecord { data, content_type })?;
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?;
            form.set_field(&name, value);
        }
    }

    Ok(form)
}

// =============================================================================
// Product Handlers
// =============================================================================

/// GET /api/products - list projection, no image payloads
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductSummary>>> {
    let categories = state.categories().find_all().await?;
    let names = convert::category_name_map(&categories);

    let products = state.products().find_summaries().await?;
    Ok(Json(
        products
            .into_iter()
            .map(|record| convert::summary_from(record, &names))
            .collect(),
    ))
}

/// GET /api/products/{id} - full detail with base64 images; bumps the
/// view counter
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductDetail>> {
    // Best-effort counter; a failed bump must not block the detail read
    if let Err(e) = state.products().increment_views(&id).await {
        tracing::warn!(id = %id, error = %e, "Failed to bump view counter");
    }

    let record = state
        .products()
        .find_detail(&id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::ProductNotFound, format!("Product {} not found", id)))?;

    let categories = state.categories().find_all().await?;
    let names = convert::category_name_map(&categories);
    Ok(Json(convert::detail_from(record, &names)))
}

/// POST /api/products - create from a multipart admin form
pub async fn create(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<Json<ProductDetail>> {
    let data = read_form(multipart).await?.into_create()?;

    // Write-time referential check; reads tolerate dangling links
    let category_id = convert::thing_to_string(&data.category);
    if state.categories().find_by_id(&category_id).await?.is_none() {
        return Err(AppError::with_message(
            ErrorCode::CategoryNotFound,
            format!("Category {} not found", category_id),
        ));
    }

    let created = state.products().create(data).await?;
    tracing::info!(
        name = %created.name,
        images = created.images.len(),
        "Product created"
    );

    let categories = state.categories().find_all().await?;
    let names = convert::category_name_map(&categories);
    Ok(Json(convert::detail_from(created, &names)))
}

/// PUT /api/products/{id} - partial metadata update; a non-empty image
/// upload replaces the whole image sequence
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<ProductDetail>> {
    let data = read_form(multipart).await?.into_update()?;

    if let Some(ref category) = data.category {
        let category_id = convert::thing_to_string(category);
        if state.categories().find_by_id(&category_id).await?.is_none() {
            return Err(AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category {} not found", category_id),
            ));
        }
    }

    let updated = state.products().update(&id, data).await.map_err(|e| match e {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::ProductNotFound, msg),
        other => other.into(),
    })?;
    tracing::info!(id = %id, "Product updated");

    let categories = state.categories().find_all().await?;
    let names = convert::category_name_map(&categories);
    Ok(Json(convert::detail_from(updated, &names)))
}

/// DELETE /api/products/{id} - hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.products().delete(&id).await.map_err(|e| match e {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::ProductNotFound, msg),
        other => other.into(),
    })?;

    tracing::info!(id = %id, "Product deleted");
    Ok(Json(true))
}
