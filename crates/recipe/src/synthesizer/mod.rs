//! Template-based recipe generation.

mod ingredients;
mod nutrition;
mod steps;
pub mod tables;
mod title;

pub use ingredients::*;
pub use nutrition::*;
pub use steps::*;
pub use title::*;

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use ulid::Ulid;
use viralcarrot_shared::recipe::{Difficulty, Filters, ORIGINAL_SOURCE, Recipe};

use crate::image::{ImageQuery, ImageSearch, MAX_IMAGE_SEARCHES, Session, fallback_image};
use crate::matcher::{match_ingredients, normalize, overlaps};
use crate::random::RandomSource;

/// Highest ranking score an original recipe can get from ingredient overlap.
pub const MAX_MATCH_SCORE: f64 = 0.95;

/// Ranking score of an original recipe when the user listed no ingredients.
pub const NO_INGREDIENTS_MATCH_SCORE: f64 = 0.9;

pub const DEFAULT_COOKING_TIME: u32 = 35;
pub const DEFAULT_SERVINGS: u16 = 4;

#[derive(Clone, Debug, Default)]
pub struct SynthesisInput {
    pub main_food: String,
    pub ingredients: Vec<String>,
    pub filters: Filters,
}

pub fn difficulty(main_food: &str, filters: &Filters) -> Difficulty {
    let food = normalize(main_food);

    if tables::HARD_FOODS.iter().any(|hard| food.contains(hard)) {
        Difficulty::Hard
    } else if filters.is_breakfast() {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}

/// Ranking score of an original recipe: share of user ingredients that
/// overlap some recipe ingredient, capped below a perfect score.
pub fn match_score(recipe_ingredients: &[String], user_ingredients: &[String]) -> f64 {
    if user_ingredients.is_empty() {
        return NO_INGREDIENTS_MATCH_SCORE;
    }

    let recipe: Vec<String> = recipe_ingredients.iter().map(|i| normalize(i)).collect();
    let matched = user_ingredients
        .iter()
        .map(|u| normalize(u))
        .filter(|u| recipe.iter().any(|r| overlaps(r, u)))
        .count();

    (matched as f64 / user_ingredients.len() as f64).min(MAX_MATCH_SCORE)
}

fn description(input: &SynthesisInput, title: &str, ingredient_count: usize, minutes: u32) -> String {
    let style = [
        input.filters.cuisine.as_deref(),
        input.filters.meal_type.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_lowercase)
    .collect::<Vec<_>>()
    .join(" ");

    let style = if style.is_empty() {
        String::new()
    } else {
        format!(" {style}")
    };

    format!(
        "{title} is a ViralCarrot original{style} recipe built around {} with {ingredient_count} ingredients, ready in about {minutes} minutes.",
        normalize(&input.main_food)
    )
}

fn tags(input: &SynthesisInput, difficulty: Difficulty) -> BTreeSet<String> {
    [
        Some(input.main_food.as_str()),
        input.filters.cuisine.as_deref(),
        input.filters.meal_type.as_deref(),
        input.filters.dietary_style.as_deref(),
        Some(difficulty.as_ref()),
        Some("original"),
    ]
    .into_iter()
    .flatten()
    .map(normalize)
    .filter(|t| !t.is_empty())
    .collect()
}

pub struct Synthesizer {
    image_search: Arc<dyn ImageSearch>,
    image_timeout: Duration,
}

impl Synthesizer {
    pub fn new(image_search: Arc<dyn ImageSearch>, image_timeout: Duration) -> Self {
        Self {
            image_search,
            image_timeout,
        }
    }

    /// Everything but the image upgrade. Title and ingredients depend only on
    /// `(input, index)`; nutrition and rating come from `random`.
    pub fn compose(
        &self,
        input: &SynthesisInput,
        index: usize,
        random: &mut dyn RandomSource,
    ) -> Recipe {
        let title = generate_title(&input.main_food, &input.filters, index);
        let ingredients = generate_ingredients(&input.main_food, &input.ingredients, &input.filters);
        let steps = generate_steps(&input.main_food, &ingredients, &input.filters);
        let difficulty = difficulty(&input.main_food, &input.filters);
        let cooking_time = input
            .filters
            .cooking_time()
            .map(|t| t.minutes())
            .unwrap_or(DEFAULT_COOKING_TIME);

        Recipe {
            id: format!("original-{}", Ulid::new()),
            description: description(input, &title, ingredients.len(), cooking_time),
            tags: tags(input, difficulty),
            ingredient_match: match_ingredients(&ingredients, &input.ingredients, &input.main_food),
            match_score: match_score(&ingredients, &input.ingredients),
            nutrition: estimate_nutrition(&input.main_food, random),
            rating: 4.0 + random.up_to(10) as f32 / 10.0,
            image: Some(fallback_image(&input.main_food, index)),
            title,
            ingredients,
            steps,
            cooking_time,
            cuisine: input.filters.cuisine.clone(),
            meal_type: input.filters.meal_type.clone(),
            dietary_style: input.filters.dietary_style.clone(),
            source: ORIGINAL_SOURCE.to_owned(),
            difficulty,
            servings: DEFAULT_SERVINGS,
            is_external: false,
            source_url: None,
        }
    }

    /// Full synthesis of a single recipe, image upgrade included.
    pub async fn synthesize(
        &self,
        session: &Session,
        input: &SynthesisInput,
        index: usize,
        random: &mut dyn RandomSource,
    ) -> Recipe {
        let mut recipe = self.compose(input, index, random);
        if let Some(image) = self.search_image(session, input, &recipe, index).await {
            recipe.image = Some(image);
        }

        recipe
    }

    /// Composes `count` recipes and upgrades the images of the first few
    /// concurrently.
    pub async fn synthesize_many(
        &self,
        session: &Session,
        input: &SynthesisInput,
        count: usize,
        random: &mut dyn RandomSource,
    ) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = (0..count)
            .map(|index| self.compose(input, index, random))
            .collect();

        let upgrades = join_all(
            recipes
                .iter()
                .enumerate()
                .take(MAX_IMAGE_SEARCHES)
                .map(|(index, recipe)| self.search_image(session, input, recipe, index)),
        )
        .await;

        for (recipe, image) in recipes.iter_mut().zip(upgrades) {
            if let Some(image) = image {
                recipe.image = Some(image);
            }
        }

        recipes
    }

    async fn search_image(
        &self,
        session: &Session,
        input: &SynthesisInput,
        recipe: &Recipe,
        index: usize,
    ) -> Option<String> {
        if index >= MAX_IMAGE_SEARCHES {
            return None;
        }

        let query = ImageQuery {
            title: recipe.title.to_owned(),
            main_food: input.main_food.to_owned(),
            cuisine: input.filters.cuisine.clone(),
            meal_type: input.filters.meal_type.clone(),
            index,
        };

        let found = tokio::time::timeout(
            self.image_timeout,
            self.image_search.search_image(session, &query),
        )
        .await;

        match found {
            Ok(Ok(Some(url))) if session.claim(&url) => Some(url),
            Ok(Ok(_)) => None,
            Ok(Err(err)) => {
                tracing::warn!(session = session.id, err = %err, title = recipe.title, "Image search failed, keeping fallback");
                None
            }
            Err(_) => {
                tracing::warn!(session = session.id, title = recipe.title, "Image search timed out, keeping fallback");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::NoImageSearch;
    use crate::random::SequenceRandom;

    fn synthesizer() -> Synthesizer {
        Synthesizer::new(Arc::new(NoImageSearch), Duration::from_secs(5))
    }

    fn input(main_food: &str, ingredients: &[&str]) -> SynthesisInput {
        SynthesisInput {
            main_food: main_food.to_owned(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            filters: Filters::default(),
        }
    }

    #[test]
    fn test_difficulty_rules() {
        let breakfast = Filters {
            meal_type: Some("Breakfast".to_owned()),
            ..Default::default()
        };

        assert_eq!(difficulty("Octopus", &Filters::default()), Difficulty::Hard);
        assert_eq!(difficulty("lamb shank", &breakfast), Difficulty::Hard);
        assert_eq!(difficulty("eggs", &breakfast), Difficulty::Easy);
        assert_eq!(difficulty("eggs", &Filters::default()), Difficulty::Medium);
    }

    #[test]
    fn test_match_score_bounds() {
        let recipe: Vec<String> = vec!["chicken".to_owned(), "garlic".to_owned()];

        assert_eq!(match_score(&recipe, &[]), NO_INGREDIENTS_MATCH_SCORE);
        assert_eq!(match_score(&recipe, &["garlic".to_owned()]), MAX_MATCH_SCORE);
        assert_eq!(
            match_score(&recipe, &["garlic".to_owned(), "basil".to_owned()]),
            0.5
        );
    }

    #[test]
    fn test_match_score_uses_first_word_overlap() {
        let recipe: Vec<String> = vec!["chicken breast".to_owned(), "rice".to_owned()];
        let user: Vec<String> = vec!["chicken thighs".to_owned(), "basil".to_owned()];

        assert_eq!(match_score(&recipe, &user), 0.5);
    }

    #[test]
    fn test_compose_chicken_example() {
        let recipe = synthesizer().compose(
            &input("chicken", &["garlic", "salt"]),
            0,
            &mut SequenceRandom::zero(),
        );

        for expected in ["chicken", "garlic", "salt", "olive oil", "black pepper", "onion"] {
            assert!(recipe.ingredients.contains(&expected.to_owned()), "{expected}");
        }

        assert_eq!(
            recipe.ingredient_match.available_ingredients,
            vec!["garlic".to_owned(), "salt".to_owned()]
        );
        assert_eq!(recipe.ingredient_match.match_percentage, 100);
        assert_eq!(recipe.source, ORIGINAL_SOURCE);
        assert!(!recipe.is_external);
        assert_eq!(recipe.rating, 4.0);
        assert_eq!(recipe.cooking_time, DEFAULT_COOKING_TIME);
        assert_eq!(recipe.image.as_deref(), Some("/images/recipes/chicken-1.jpg"));
        assert!(recipe.tags.contains("original"));
    }

    #[test]
    fn test_title_and_ingredients_are_deterministic() {
        let synthesizer = synthesizer();
        let input = input("salmon", &["lemon", "dill"]);

        let first = synthesizer.compose(&input, 4, &mut SequenceRandom::new(vec![7, 1, 3]));
        let second = synthesizer.compose(&input, 4, &mut SequenceRandom::new(vec![180, 12, 29]));

        assert_eq!(first.title, second.title);
        assert_eq!(first.ingredients, second.ingredients);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_synthesize_many_keeps_fallbacks_without_provider() {
        let recipes = synthesizer()
            .synthesize_many(
                &Session::new(),
                &input("tofu", &[]),
                6,
                &mut SequenceRandom::zero(),
            )
            .await;

        assert_eq!(recipes.len(), 6);
        assert_eq!(recipes[3].image.as_deref(), Some("/images/recipes/tofu-1.jpg"));
        assert!(recipes.iter().all(|r| r.match_score == NO_INGREDIENTS_MATCH_SCORE));
    }
}
