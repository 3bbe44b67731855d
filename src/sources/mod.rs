//! Concrete recipe sources behind the `RecipeSource` seam.

mod catalog;
mod community;
mod mealdb;

pub use catalog::CatalogSource;
pub use community::CommunitySource;
pub use mealdb::MealDbSource;

use std::sync::Arc;

use viralcarrot_recipe::source::RecipeSource;

use crate::config::SourcesConfig;

/// Sources enabled by configuration, in fan-out order.
pub fn from_config(
    config: &SourcesConfig,
    client: &reqwest::Client,
) -> anyhow::Result<Vec<Arc<dyn RecipeSource>>> {
    let mut sources: Vec<Arc<dyn RecipeSource>> = vec![];

    if config.catalog {
        sources.push(Arc::new(CatalogSource::builtin()?));
    }

    sources.push(Arc::new(CommunitySource::new(&config.community_path)));

    if config.mealdb.enabled {
        sources.push(Arc::new(MealDbSource::new(
            client.clone(),
            &config.mealdb.base_url,
            config.mealdb.limit,
        )));
    }

    tracing::info!(
        sources = ?sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
        "Recipe sources configured"
    );

    Ok(sources)
}
