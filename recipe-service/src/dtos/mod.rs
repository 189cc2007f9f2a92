use crate::models::Recipe;
use serde::Serialize;

/// Envelope for GET `/recipes`.
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}
