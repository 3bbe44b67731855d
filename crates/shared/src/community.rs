use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::recipe::{Difficulty, Recipe};

/// Source name given to recipes shared by users.
pub const COMMUNITY_SOURCE: &str = "Community";

/// A recipe submitted by a user, as stored in the recipe file.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecipe {
    pub id: String,
    pub user_id: String,
    pub created_by: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub cooking_time: u32,
    pub servings: Option<u16>,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub dietary_style: Option<String>,
    pub tags: BTreeSet<String>,
    pub image: Option<String>,
    pub is_approved: bool,
    pub is_public: bool,
}

impl UserRecipe {
    /// Only moderated recipes their owner chose to share are visible.
    pub fn is_visible(&self) -> bool {
        self.is_approved && self.is_public
    }
}

impl From<UserRecipe> for Recipe {
    fn from(value: UserRecipe) -> Self {
        let mut tags = value.tags;
        tags.insert("community".to_owned());

        Recipe {
            id: format!("community-{}", value.id),
            title: value.title,
            description: value.description,
            ingredients: value.ingredients,
            steps: value.steps,
            cooking_time: value.cooking_time,
            cuisine: value.cuisine,
            meal_type: value.meal_type,
            dietary_style: value.dietary_style,
            tags,
            source: COMMUNITY_SOURCE.to_owned(),
            rating: 4.0,
            difficulty: Difficulty::Medium,
            servings: value.servings.unwrap_or(4),
            is_external: true,
            image: value.image,
            ..Default::default()
        }
    }
}
