use axum::{
    Router,
    routing::{get, post},
};
use viralcarrot_recipe::Discovery;

mod health;
mod pantry;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub discovery: Discovery,
    /// Exposes error details in 500 responses.
    pub development: bool,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/generate-recipes", post(recipes::generate))
        .route("/api/external-recipes", post(recipes::external))
        .route("/api/pantry-wizard", post(pantry::action))
        .with_state(app_state)
}
