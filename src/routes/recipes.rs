use axum::{Json, extract::State};
use serde::Serialize;
use viralcarrot_recipe::{GenerateInput, Page};

use crate::error::{ApiError, ApiJson};
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: Page,
}

/// POST /api/generate-recipes
pub async fn generate(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<GenerateInput>,
) -> Result<Json<PageResponse>, ApiError> {
    let page = state
        .discovery
        .generate(input)
        .await
        .map_err(|err| ApiError::from_error(err, state.development))?;

    Ok(Json(PageResponse {
        success: true,
        page,
    }))
}

/// POST /api/external-recipes
pub async fn external(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<GenerateInput>,
) -> Result<Json<PageResponse>, ApiError> {
    let page = state
        .discovery
        .external_only(input)
        .await
        .map_err(|err| ApiError::from_error(err, state.development))?;

    Ok(Json(PageResponse {
        success: true,
        page,
    }))
}
