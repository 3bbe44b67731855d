use std::collections::BTreeSet;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use viralcarrot_recipe::source::{RecipeSource, SourceQuery};
use viralcarrot_shared::recipe::Recipe;

pub const MEALDB_SOURCE: &str = "TheMealDB";

/// TheMealDB numbers ingredient slots `strIngredient1` to `strIngredient20`.
const INGREDIENT_SLOTS: usize = 20;

#[derive(Deserialize)]
struct SearchResponse {
    meals: Option<Vec<Map<String, Value>>>,
}

fn field<'a>(meal: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    meal.get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn ingredients(meal: &Map<String, Value>) -> Vec<String> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| field(meal, &format!("strIngredient{slot}")))
        .map(|i| i.to_lowercase())
        .collect()
}

fn steps(instructions: &str) -> Vec<String> {
    instructions
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let lower = line.to_lowercase();
            !(lower.starts_with("step") && lower.len() <= 8)
        })
        .map(str::to_owned)
        .collect()
}

fn meal_type(category: Option<&str>) -> Option<String> {
    match category? {
        "Breakfast" => Some("Breakfast".to_owned()),
        "Dessert" => Some("Dessert".to_owned()),
        "Starter" => Some("Appetizer".to_owned()),
        _ => None,
    }
}

fn dietary_style(category: Option<&str>) -> Option<String> {
    match category? {
        "Vegan" => Some("Vegan".to_owned()),
        "Vegetarian" => Some("Vegetarian".to_owned()),
        _ => None,
    }
}

/// Maps one search hit; hits without an id or a title are skipped.
fn to_recipe(meal: &Map<String, Value>) -> Option<Recipe> {
    let id = field(meal, "idMeal")?;
    let title = field(meal, "strMeal")?;
    let category = field(meal, "strCategory");
    let area = field(meal, "strArea");

    let tags: BTreeSet<String> = field(meal, "strTags")
        .unwrap_or_default()
        .split(',')
        .chain(category)
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    Some(Recipe {
        id: format!("mealdb-{id}"),
        title: title.to_owned(),
        description: match area {
            Some(area) => format!("A {area} favourite from TheMealDB."),
            None => "A favourite from TheMealDB.".to_owned(),
        },
        ingredients: ingredients(meal),
        steps: field(meal, "strInstructions").map(steps).unwrap_or_default(),
        cuisine: area.filter(|a| *a != "Unknown").map(str::to_owned),
        meal_type: meal_type(category),
        dietary_style: dietary_style(category),
        tags,
        source: MEALDB_SOURCE.to_owned(),
        rating: 4.3,
        servings: 4,
        is_external: true,
        source_url: Some(
            field(meal, "strSource")
                .map(str::to_owned)
                .unwrap_or_else(|| format!("https://www.themealdb.com/meal/{id}")),
        ),
        image: field(meal, "strMealThumb").map(str::to_owned),
        ..Default::default()
    })
}

/// Searches TheMealDB by main food.
pub struct MealDbSource {
    client: reqwest::Client,
    base_url: String,
    limit: usize,
}

impl MealDbSource {
    pub fn new(client: reqwest::Client, base_url: &str, limit: usize) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            limit,
        }
    }
}

#[async_trait]
impl RecipeSource for MealDbSource {
    fn name(&self) -> &str {
        "mealdb"
    }

    async fn fetch_candidates(&self, query: &SourceQuery) -> anyhow::Result<Vec<Recipe>> {
        let url = format!("{}/search.php", self.base_url);
        let resp = self
            .client
            .get(url)
            .query(&[("s", query.main_food.as_str())])
            .send()
            .await
            .context("send TheMealDB search request")?;

        if resp.status() != StatusCode::OK {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("TheMealDB search failed ({status}): {body}");
        }

        let found: SearchResponse = resp.json().await.context("decode TheMealDB response")?;

        Ok(found
            .meals
            .unwrap_or_default()
            .iter()
            .filter_map(to_recipe)
            .take(self.limit)
            .collect())
    }
}
