use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use viralcarrot_shared::recipe::{Filters, Recipe};

use crate::cache::{TtlCache, cache_key};
use crate::image::Session;
use crate::matcher::match_ingredients;
use crate::pantry::pantry_match;
use crate::random::{RandomFactory, thread_random};
use crate::ranking::{PAGE_SIZE, Page, aggregate};
use crate::source::{RecipeSource, SourceQuery, fetch_all};
use crate::synthesizer::{SynthesisInput, Synthesizer};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

fn has_items(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

fn cleaned(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect()
}

#[derive(Deserialize, Serialize, Validate, Default, Clone, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateInput {
    #[validate(custom(function = "not_blank", message = "Main food is required"))]
    pub main_food: String,
    pub ingredients: Vec<String>,
    pub filters: Filters,
    pub page: usize,
}

impl GenerateInput {
    fn normalized(self) -> Self {
        Self {
            main_food: self.main_food.trim().to_owned(),
            ingredients: cleaned(self.ingredients),
            filters: self.filters.normalized(),
            page: self.page.max(1),
        }
    }

    fn synthesis(&self) -> SynthesisInput {
        SynthesisInput {
            main_food: self.main_food.to_owned(),
            ingredients: self.ingredients.to_vec(),
            filters: self.filters.clone(),
        }
    }

    fn source_query(&self) -> SourceQuery {
        SourceQuery::new(&self.main_food, &self.ingredients)
    }
}

#[derive(Deserialize, Validate, Default, Clone, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct PantryInput {
    #[validate(custom(
        function = "has_items",
        message = "Please add at least one pantry ingredient"
    ))]
    pub pantry_ingredients: Vec<String>,
    pub filters: Filters,
}

#[derive(Clone, Debug)]
pub struct Settings {
    /// Synthesized recipes per request, before pagination.
    pub original_count: usize,
    pub page_size: usize,
    pub generate_ttl: Duration,
    pub external_ttl: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            original_count: 6,
            page_size: PAGE_SIZE,
            generate_ttl: Duration::from_secs(30 * 60),
            external_ttl: Duration::from_secs(60 * 60),
        }
    }
}

/// Runs the generate, external-only and pantry flows over the configured
/// sources and synthesizer.
#[derive(Clone)]
pub struct Discovery {
    sources: Arc<[Arc<dyn RecipeSource>]>,
    synthesizer: Arc<Synthesizer>,
    cache: Arc<TtlCache<Page>>,
    random: RandomFactory,
    settings: Settings,
}

impl Discovery {
    pub fn new(
        sources: Vec<Arc<dyn RecipeSource>>,
        synthesizer: Synthesizer,
        cache: Arc<TtlCache<Page>>,
        settings: Settings,
    ) -> Self {
        Self {
            sources: sources.into(),
            synthesizer: Arc::new(synthesizer),
            cache,
            random: thread_random(),
            settings,
        }
    }

    pub fn with_random(mut self, random: RandomFactory) -> Self {
        self.random = random;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Originals plus matching external recipes, ranked and paginated.
    pub async fn generate(&self, input: GenerateInput) -> crate::Result<Page> {
        input.validate()?;
        let input = input.normalized();
        let key = cache_key("generate", &input)?;

        self.cache
            .get_or_compute(&key, self.settings.generate_ttl, move || async move {
                let session = Session::new();
                tracing::info!(
                    session = session.id,
                    main_food = input.main_food,
                    ingredients = input.ingredients.len(),
                    page = input.page,
                    "Generating recipes"
                );

                let synthesis = input.synthesis();
                let mut random = (self.random)();
                let (originals, external) = tokio::join!(
                    self.synthesizer.synthesize_many(
                        &session,
                        &synthesis,
                        self.settings.original_count,
                        random.as_mut(),
                    ),
                    self.external(&input),
                );

                Ok::<_, crate::Error>(aggregate(
                    originals,
                    external,
                    input.page,
                    self.settings.page_size,
                ))
            })
            .await
    }

    /// External recipes only, same ranking and pagination.
    pub async fn external_only(&self, input: GenerateInput) -> crate::Result<Page> {
        input.validate()?;
        let input = input.normalized();
        let key = cache_key("external", &input)?;

        self.cache
            .get_or_compute(&key, self.settings.external_ttl, move || async move {
                tracing::info!(main_food = input.main_food, page = input.page, "Fetching external recipes");
                let external = self.external(&input).await;

                Ok::<_, crate::Error>(aggregate(vec![], external, input.page, self.settings.page_size))
            })
            .await
    }

    /// External recipes cookable from the pantry, best coverage first.
    pub async fn pantry(&self, input: PantryInput) -> crate::Result<Vec<Recipe>> {
        input.validate()?;
        let pantry = cleaned(input.pantry_ingredients);
        let filters = input.filters.normalized();

        let (main_food, rest) = match pantry.split_first() {
            Some(split) => split,
            None => viralcarrot_shared::user!("Please add at least one pantry ingredient"),
        };

        let candidates = fetch_all(&self.sources, &SourceQuery::new(main_food, rest))
            .await
            .into_iter()
            .filter(|recipe| filters.admits(recipe))
            .collect::<Vec<_>>();

        let candidate_count = candidates.len();
        let recipes = pantry_match(candidates, &pantry);
        tracing::info!(
            pantry = pantry.len(),
            candidates = candidate_count,
            matched = recipes.len(),
            "Pantry wizard matched recipes"
        );

        Ok(recipes)
    }

    /// Fetches, filters and scores external recipes for the user's ingredients.
    async fn external(&self, input: &GenerateInput) -> Vec<Recipe> {
        fetch_all(&self.sources, &input.source_query())
            .await
            .into_iter()
            .filter(|recipe| input.filters.admits(recipe))
            .map(|mut recipe| {
                recipe.ingredient_match =
                    match_ingredients(&recipe.ingredients, &input.ingredients, &input.main_food);
                recipe.match_score = f64::from(recipe.ingredient_match.match_percentage) / 100.0;
                recipe
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_input_requires_main_food() {
        let input = GenerateInput {
            main_food: "   ".to_owned(),
            ..Default::default()
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_generate_input_normalization() {
        let input = GenerateInput {
            main_food: " Chicken ".to_owned(),
            ingredients: vec![" garlic".to_owned(), "".to_owned()],
            filters: Filters {
                cuisine: Some("any".to_owned()),
                ..Default::default()
            },
            page: 0,
        }
        .normalized();

        assert_eq!(input.main_food, "Chicken");
        assert_eq!(input.ingredients, vec!["garlic".to_owned()]);
        assert_eq!(input.filters.cuisine, None);
        assert_eq!(input.page, 1);
    }

    #[test]
    fn test_pantry_input_requires_an_ingredient() {
        let input = PantryInput {
            pantry_ingredients: vec![" ".to_owned()],
            ..Default::default()
        };

        assert!(input.validate().is_err());
    }
}
