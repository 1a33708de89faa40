//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::RepoError;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryCreate};

/// GET /api/categories - list all categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.categories().find_all().await?;
    Ok(Json(categories.into_iter().map(Category::from).collect()))
}

/// POST /api/categories - create a category
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::required_field("name"));
    }

    let created = state.categories().create(name).await.map_err(|e| match e {
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::CategoryNameExists, msg),
        other => other.into(),
    })?;

    tracing::info!(name = %created.name, "Category created");
    Ok(Json(Category::from(created)))
}

/// DELETE /api/categories/{id} - delete a category (refused while referenced)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.categories().delete(&id).await.map_err(|e| match e {
        RepoError::Validation(msg) => {
            AppError::with_message(ErrorCode::CategoryHasProducts, msg)
        }
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::CategoryNotFound, msg),
        other => other.into(),
    })?;

    tracing::info!(id = %id, "Category deleted");
    Ok(Json(true))
}
