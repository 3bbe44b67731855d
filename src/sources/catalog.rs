use anyhow::Context;
use async_trait::async_trait;
use viralcarrot_recipe::source::{RecipeSource, SourceQuery};
use viralcarrot_shared::recipe::Recipe;

const BUILTIN: &str = include_str!("../../data/catalog.json");

/// Popular recipes from well-known publishers, bundled with the binary.
pub struct CatalogSource {
    recipes: Vec<Recipe>,
}

impl CatalogSource {
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN).context("parse built-in recipe catalog")
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(Self {
            recipes: serde_json::from_str(json)?,
        })
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait]
impl RecipeSource for CatalogSource {
    fn name(&self) -> &str {
        "catalog"
    }

    async fn fetch_candidates(&self, query: &SourceQuery) -> anyhow::Result<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| query.is_relevant(recipe))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() -> anyhow::Result<()> {
        let catalog = CatalogSource::builtin()?;

        assert!(!catalog.is_empty());
        assert!(catalog.recipes.iter().all(|r| r.is_external && !r.ingredients.is_empty()));
        Ok(())
    }

    #[tokio::test]
    async fn test_only_relevant_recipes_are_returned() -> anyhow::Result<()> {
        let catalog = CatalogSource::builtin()?;

        let recipes = catalog
            .fetch_candidates(&SourceQuery::new("salmon", &[]))
            .await?;

        assert!(!recipes.is_empty());
        assert!(recipes.iter().all(|r| {
            r.title.to_lowercase().contains("salmon")
                || r.ingredients.iter().any(|i| i.contains("salmon"))
        }));
        Ok(())
    }
}
