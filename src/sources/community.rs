use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use viralcarrot_recipe::source::{RecipeSource, SourceQuery};
use viralcarrot_shared::community::UserRecipe;
use viralcarrot_shared::recipe::Recipe;

/// Approved public recipes from the user recipe file, read on every call.
pub struct CommunitySource {
    path: PathBuf,
}

impl CommunitySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> anyhow::Result<Vec<UserRecipe>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()));
            }
        };

        if content.trim().is_empty() {
            return Ok(vec![]);
        }

        serde_json::from_str(&content).with_context(|| format!("parse {}", self.path.display()))
    }
}

#[async_trait]
impl RecipeSource for CommunitySource {
    fn name(&self) -> &str {
        "community"
    }

    async fn fetch_candidates(&self, query: &SourceQuery) -> anyhow::Result<Vec<Recipe>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(UserRecipe::is_visible)
            .map(Recipe::from)
            .filter(|recipe| query.is_relevant(recipe))
            .collect())
    }
}
