use axum::{Json, extract::State};
use serde::Serialize;
use viralcarrot_recipe::PantryInput;
use viralcarrot_shared::recipe::Recipe;

use crate::error::{ApiError, ApiJson};
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct PantryResponse {
    pub success: bool,
    pub recipes: Vec<Recipe>,
    pub total: usize,
}

/// POST /api/pantry-wizard
pub async fn action(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<PantryInput>,
) -> Result<Json<PantryResponse>, ApiError> {
    let recipes = state
        .discovery
        .pantry(input)
        .await
        .map_err(|err| ApiError::from_error(err, state.development))?;

    Ok(Json(PantryResponse {
        success: true,
        total: recipes.len(),
        recipes,
    }))
}
