mod filters;

pub use filters::*;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Source name carried by every synthesized recipe.
pub const ORIGINAL_SOURCE: &str = "ViralCarrot";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Nutrition {
    pub const fn new(calories: u32, protein: u32, carbs: u32, fat: u32) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// Derived on every request, never stored.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMatch {
    pub available_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub match_percentage: u8,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub cooking_time: u32,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub dietary_style: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub source: String,
    pub rating: f32,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub servings: u16,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub ingredient_match: IngredientMatch,
    #[serde(default)]
    pub match_score: f64,
    pub is_external: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Recipe {
    pub fn is_original(&self) -> bool {
        !self.is_external
    }
}
