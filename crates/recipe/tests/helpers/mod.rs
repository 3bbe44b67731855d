#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use viralcarrot_recipe::image::{ImageQuery, ImageSearch, Session};
use viralcarrot_recipe::random::SequenceRandom;
use viralcarrot_recipe::source::{RecipeSource, SourceQuery};
use viralcarrot_recipe::synthesizer::Synthesizer;
use viralcarrot_recipe::{Discovery, Settings, TtlCache};
use viralcarrot_shared::recipe::Recipe;

pub fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: title.to_lowercase().replace(' ', "-"),
        title: title.to_owned(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        source: "Test Kitchen".to_owned(),
        rating: 4.5,
        cooking_time: 25,
        servings: 4,
        ..Default::default()
    }
}

/// Returns the same recipes for every query and counts calls.
pub struct FixedSource {
    pub recipes: Vec<Recipe>,
    pub calls: AtomicUsize,
}

impl FixedSource {
    pub fn new(recipes: Vec<Recipe>) -> Arc<Self> {
        Arc::new(Self {
            recipes,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch_candidates(&self, _query: &SourceQuery) -> anyhow::Result<Vec<Recipe>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.recipes.clone())
    }
}

pub struct FailingSource;

#[async_trait]
impl RecipeSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_candidates(&self, _query: &SourceQuery) -> anyhow::Result<Vec<Recipe>> {
        anyhow::bail!("upstream unavailable")
    }
}

/// Hands out `https://img.test/{index}.jpg`, or the same URL for every query.
pub struct FakeImageSearch {
    pub same_url: bool,
    pub delay: Option<Duration>,
}

#[async_trait]
impl ImageSearch for FakeImageSearch {
    async fn search_image(
        &self,
        _session: &Session,
        query: &ImageQuery,
    ) -> anyhow::Result<Option<String>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.same_url {
            return Ok(Some("https://img.test/same.jpg".to_owned()));
        }

        Ok(Some(format!("https://img.test/{}.jpg", query.index)))
    }
}

pub fn discovery(sources: Vec<Arc<dyn RecipeSource>>, images: impl ImageSearch + 'static) -> Discovery {
    Discovery::new(
        sources,
        Synthesizer::new(Arc::new(images), Duration::from_secs(5)),
        Arc::new(TtlCache::new()),
        Settings::default(),
    )
    .with_random(SequenceRandom::factory(vec![3, 1, 4, 1, 5]))
}
