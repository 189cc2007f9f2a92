//! Recipe endpoints.
//!
//! The only failure mode is a missing id, surfaced as a 404 with the fixed
//! `{"message": "Recipe not found"}` body.

use axum::{
    Json,
    extract::{Path, State},
};
use service_core::error::AppError;

use crate::{
    AppState,
    dtos::RecipeListResponse,
    models::{Recipe, RecipePatch},
};

/// GET `/recipes` — the full seed-ordered list.
pub async fn list_recipes(State(state): State<AppState>) -> Json<RecipeListResponse> {
    let recipes = state.store.list().await;
    tracing::debug!(count = recipes.len(), "Listing recipes");
    Json(RecipeListResponse { recipes })
}

/// GET `/recipes/{id}`.
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>, AppError> {
    tracing::info!(recipe_id = id, "Fetching recipe");

    let recipe = state
        .store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Recipe not found")))?;

    Ok(Json(recipe))
}

/// PUT/PATCH `/recipes/{id}` — merge-update the fields present in the body.
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<RecipePatch>,
) -> Result<Json<Recipe>, AppError> {
    tracing::info!(recipe_id = id, "Updating recipe");

    let recipe = state
        .store
        .update(id, patch)
        .await
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Recipe not found")))?;

    Ok(Json(recipe))
}
