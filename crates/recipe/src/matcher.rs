//! Ingredient normalization and overlap matching.
//!
//! Two directions are supported:
//! - [`match_ingredients`]: how many of the *user's* ingredients a recipe uses
//! - [`match_coverage`]: how many of the *recipe's* ingredients a pantry covers

use viralcarrot_shared::recipe::IngredientMatch;

/// Match percentage reported when the user gave no ingredients but the main
/// food is part of the recipe.
pub const MAIN_FOOD_ONLY_PERCENTAGE: u8 = 85;

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn first_token(value: &str) -> Option<&str> {
    value.split_whitespace().next()
}

/// Loose overlap between two already normalized ingredient names.
///
/// Either name contains the other, or the first word of one appears in the
/// other ("black pepper" and "pepper", "chicken breast" and "chicken thighs").
pub fn overlaps(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    if a.contains(b) || b.contains(a) {
        return true;
    }

    first_token(a).is_some_and(|token| b.contains(token))
        || first_token(b).is_some_and(|token| a.contains(token))
}

fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    ((part as f64 * 100.0 / total as f64).round() as u64).min(100) as u8
}

/// Classifies every user ingredient as available or missing in a recipe.
///
/// With no user ingredients there is nothing to divide by: the result is
/// `[main_food]` at 85% when the main food appears in the recipe, otherwise
/// an empty match at 0%.
pub fn match_ingredients(
    recipe_ingredients: &[String],
    user_ingredients: &[String],
    main_food: &str,
) -> IngredientMatch {
    let recipe: Vec<String> = recipe_ingredients.iter().map(|i| normalize(i)).collect();

    if user_ingredients.is_empty() {
        let food = normalize(main_food);
        let found = !food.is_empty() && recipe.iter().any(|r| r.contains(&food));

        return IngredientMatch {
            available_ingredients: if found {
                vec![main_food.trim().to_owned()]
            } else {
                vec![]
            },
            missing_ingredients: vec![],
            match_percentage: if found { MAIN_FOOD_ONLY_PERCENTAGE } else { 0 },
        };
    }

    let (available, missing): (Vec<String>, Vec<String>) = user_ingredients
        .iter()
        .map(|i| i.trim().to_owned())
        .partition(|user| {
            let user = normalize(user);
            recipe.iter().any(|r| overlaps(r, &user))
        });

    let match_percentage = percentage(available.len(), user_ingredients.len());

    IngredientMatch {
        available_ingredients: available,
        missing_ingredients: missing,
        match_percentage,
    }
}

/// Classifies every recipe ingredient as covered or not by a pantry.
///
/// The percentage is relative to the recipe's ingredient count; a recipe
/// without ingredients scores 0.
pub fn match_coverage(recipe_ingredients: &[String], pantry: &[String]) -> IngredientMatch {
    let pantry: Vec<String> = pantry
        .iter()
        .map(|p| normalize(p))
        .filter(|p| !p.is_empty())
        .collect();

    let (available, missing): (Vec<String>, Vec<String>) = recipe_ingredients
        .iter()
        .map(|i| i.trim().to_owned())
        .partition(|ingredient| {
            let ingredient = normalize(ingredient);
            pantry.iter().any(|p| overlaps(&ingredient, p))
        });

    let match_percentage = percentage(available.len(), recipe_ingredients.len());

    IngredientMatch {
        available_ingredients: available,
        missing_ingredients: missing,
        match_percentage,
    }
}
