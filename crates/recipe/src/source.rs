use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use viralcarrot_shared::recipe::Recipe;

use crate::matcher::normalize;

#[derive(Clone, Debug, Default)]
pub struct SourceQuery {
    /// Free-text search, main food followed by supporting ingredients.
    pub query: String,
    pub main_food: String,
    pub ingredients: Vec<String>,
}

impl SourceQuery {
    pub fn new(main_food: &str, ingredients: &[String]) -> Self {
        let query = std::iter::once(main_food)
            .chain(ingredients.iter().map(String::as_str))
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            query,
            main_food: main_food.trim().to_owned(),
            ingredients: ingredients.to_vec(),
        }
    }

    /// Whether the main food or a supporting ingredient appears in the
    /// recipe's title or ingredient list.
    pub fn is_relevant(&self, recipe: &Recipe) -> bool {
        let text = normalize(&format!("{} {}", recipe.title, recipe.ingredients.join(" ")));

        std::iter::once(&self.main_food)
            .chain(self.ingredients.iter())
            .map(|term| normalize(term))
            .any(|term| !term.is_empty() && text.contains(&term))
    }
}

/// A provider of externally authored recipes.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_candidates(&self, query: &SourceQuery) -> anyhow::Result<Vec<Recipe>>;
}

/// Queries every source concurrently. A failing source is logged and
/// contributes nothing; everything returned is marked external.
pub async fn fetch_all(sources: &[Arc<dyn RecipeSource>], query: &SourceQuery) -> Vec<Recipe> {
    let results = join_all(sources.iter().map(|source| async move {
        (source.name(), source.fetch_candidates(query).await)
    }))
    .await;

    results
        .into_iter()
        .flat_map(|(name, result)| match result {
            Ok(recipes) => {
                tracing::debug!(source = name, count = recipes.len(), "Fetched external recipes");
                recipes
            }
            Err(err) => {
                tracing::warn!(source = name, err = %err, query = query.query, "Recipe source failed");
                vec![]
            }
        })
        .map(|mut recipe| {
            recipe.is_external = true;
            recipe
        })
        .collect()
}
