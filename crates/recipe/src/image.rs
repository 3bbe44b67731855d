//! Recipe pictures: curated fallbacks, the image-search collaborator and
//! the food-content filter its results go through.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use ulid::Ulid;

use crate::synthesizer::tables::category;

/// Number of curated pictures per category.
pub const FALLBACK_POOL_SIZE: usize = 3;

/// Only the first recipes of a request may hit the image provider.
pub const MAX_IMAGE_SEARCHES: usize = 3;

const LIVE_ANIMAL_TERMS: &[&str] = &[
    "live chicken",
    "live animal",
    "livestock",
    "butcher",
    "slaughter",
    "farm animal",
    "poultry farm",
    "barn",
    "hen",
    "rooster",
    "chick",
    "cow",
    "cattle",
    "pig",
    "sheep",
    "goat",
    "flock",
    "herd",
    "grazing",
    "pasture",
];

const FOOD_TERMS: &[&str] = &[
    "cooked",
    "grilled",
    "roasted",
    "baked",
    "fried",
    "plated",
    "dish",
    "meal",
    "served",
    "plate",
    "bowl",
    "recipe",
    "food",
    "dinner",
    "lunch",
    "breakfast",
    "sauce",
    "garnish",
    "homemade",
    "delicious",
];

/// Curated picture for the `index`-th recipe, cycling through the pool.
pub fn fallback_image(main_food: &str, index: usize) -> String {
    format!(
        "/images/recipes/{}-{}.jpg",
        category(main_food).unwrap_or("generic"),
        index % FALLBACK_POOL_SIZE + 1
    )
}

/// Whole-word (or whole-phrase) match, so "kitchen" never reads as "hen".
fn mentions(text: &str, term: &str) -> bool {
    let words: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let words = format!(" {} ", words.split_whitespace().collect::<Vec<_>>().join(" "));

    words.contains(&format!(" {term} "))
}

/// Rejects pictures described as live animals. No description is fine.
pub fn is_acceptable_image(description: Option<&str>) -> bool {
    match description {
        Some(text) => !LIVE_ANIMAL_TERMS.iter().any(|term| mentions(text, term)),
        None => true,
    }
}

pub fn looks_like_food(description: Option<&str>) -> bool {
    description.is_some_and(|text| FOOD_TERMS.iter().any(|term| mentions(text, term)))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageCandidate {
    pub url: String,
    pub description: Option<String>,
}

/// Picks a result for the `index`-th recipe among acceptable candidates,
/// preferring the ones described as prepared food.
pub fn choose_image(candidates: &[ImageCandidate], index: usize) -> Option<&str> {
    let acceptable: Vec<&ImageCandidate> = candidates
        .iter()
        .filter(|c| !c.url.is_empty() && is_acceptable_image(c.description.as_deref()))
        .collect();

    let preferred: Vec<&ImageCandidate> = acceptable
        .iter()
        .copied()
        .filter(|c| looks_like_food(c.description.as_deref()))
        .collect();

    let pool = if preferred.is_empty() {
        &acceptable
    } else {
        &preferred
    };

    if pool.is_empty() {
        return None;
    }

    Some(pool[index % pool.len()].url.as_str())
}

/// Per-request context handed down to the image collaborator.
#[derive(Debug)]
pub struct Session {
    pub id: String,
    used_images: Mutex<HashSet<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Ulid::new().to_string(),
            used_images: Mutex::new(HashSet::new()),
        }
    }

    /// Reserves a picture for this request; false when it was already used.
    pub fn claim(&self, url: &str) -> bool {
        self.used_images
            .lock()
            .map(|mut used| used.insert(url.to_owned()))
            .unwrap_or(false)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ImageQuery {
    pub title: String,
    pub main_food: String,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub index: usize,
}

impl ImageQuery {
    /// Free-text search terms, most specific first.
    pub fn terms(&self) -> String {
        [
            Some(self.title.as_str()),
            Some(self.main_food.as_str()),
            self.cuisine.as_deref(),
            self.meal_type.as_deref(),
            Some("food"),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Returns a food picture URL, or `None` when nothing suitable was found.
    async fn search_image(
        &self,
        session: &Session,
        query: &ImageQuery,
    ) -> anyhow::Result<Option<String>>;
}

/// Used when no image provider is configured.
#[derive(Clone, Copy, Default)]
pub struct NoImageSearch;

#[async_trait]
impl ImageSearch for NoImageSearch {
    async fn search_image(
        &self,
        _session: &Session,
        _query: &ImageQuery,
    ) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}
