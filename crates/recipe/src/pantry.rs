//! Pantry wizard: which external recipes can be cooked from what is on hand.

use viralcarrot_shared::recipe::Recipe;

use crate::matcher::{match_coverage, normalize};
use crate::ranking::rank;

/// Share of a recipe's ingredients a candidate must have on hand to get a
/// detailed match.
pub const PREFILTER_THRESHOLD: f64 = 0.3;

/// Minimum coverage (inclusive) of a recipe's ingredients by the pantry.
pub const MATCH_THRESHOLD: u8 = 50;

pub const MAX_RESULTS: usize = 12;

/// Coarse relevance: share of the recipe's ingredients mentioned by some
/// pantry item. Plain substring check in either direction.
pub fn prefilter_score(recipe: &Recipe, pantry: &[String]) -> f64 {
    let pantry: Vec<String> = pantry
        .iter()
        .map(|p| normalize(p))
        .filter(|p| !p.is_empty())
        .collect();

    if pantry.is_empty() || recipe.ingredients.is_empty() {
        return 0.0;
    }

    let hits = recipe
        .ingredients
        .iter()
        .map(|i| normalize(i))
        .filter(|i| {
            !i.is_empty()
                && pantry
                    .iter()
                    .any(|p| i.contains(p.as_str()) || p.contains(i.as_str()))
        })
        .count();

    hits as f64 / recipe.ingredients.len() as f64
}

/// Keeps recipes whose ingredients are at least half covered by the pantry,
/// best coverage first.
pub fn pantry_match(candidates: Vec<Recipe>, pantry: &[String]) -> Vec<Recipe> {
    let mut matched: Vec<Recipe> = candidates
        .into_iter()
        .filter(|recipe| !recipe.ingredients.is_empty())
        .filter(|recipe| prefilter_score(recipe, pantry) >= PREFILTER_THRESHOLD)
        .filter_map(|mut recipe| {
            let coverage = match_coverage(&recipe.ingredients, pantry);
            if coverage.match_percentage < MATCH_THRESHOLD {
                return None;
            }

            recipe.match_score = f64::from(coverage.match_percentage) / 100.0;
            recipe.ingredient_match = coverage;
            Some(recipe)
        })
        .collect();

    rank(&mut matched);
    matched.truncate(MAX_RESULTS);

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: title.to_lowercase(),
            title: title.to_owned(),
            ingredients: list(ingredients),
            is_external: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_boundary_recipe_is_included() {
        let result = pantry_match(
            vec![recipe(
                "Chicken Fried Rice",
                &["chicken breast", "rice", "soy sauce", "ginger"],
            )],
            &list(&["rice", "chicken"]),
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].ingredient_match.match_percentage, 50);
        assert_eq!(
            result[0].ingredient_match.available_ingredients,
            list(&["chicken breast", "rice"])
        );
        assert_eq!(result[0].match_score, 0.5);
    }

    #[test]
    fn test_low_coverage_is_dropped() {
        let result = pantry_match(
            vec![recipe(
                "Beef Stew",
                &["beef", "carrot", "potato", "onion", "stock"],
            )],
            &list(&["beef", "rice"]),
        );

        assert!(result.is_empty());
    }

    #[test]
    fn test_prefilter_drops_unrelated_candidates() {
        let unrelated = recipe("Lemon Tart", &["lemon", "butter", "flour"]);

        assert_eq!(prefilter_score(&unrelated, &list(&["rice", "chicken", "egg"])), 0.0);
        assert!(pantry_match(vec![unrelated], &list(&["rice", "chicken", "egg"])).is_empty());
    }

    #[test]
    fn test_large_pantry_keeps_fully_covered_recipe() {
        let pantry = list(&[
            "rice", "egg", "milk", "flour", "butter", "sugar", "onion", "carrot", "garlic",
        ]);
        let fried_rice = recipe("Egg Fried Rice", &["rice", "egg"]);

        assert_eq!(prefilter_score(&fried_rice, &pantry), 1.0);

        let result = pantry_match(vec![fried_rice], &pantry);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].ingredient_match.match_percentage, 100);
    }

    #[test]
    fn test_prefilter_is_share_of_recipe_ingredients() {
        let stew = recipe("Beef Stew", &["beef", "carrot", "potato", "onion"]);

        assert_eq!(prefilter_score(&stew, &list(&["beef", "rice"])), 0.25);
        assert!(pantry_match(vec![stew], &list(&["beef", "rice"])).is_empty());
    }

    #[test]
    fn test_empty_ingredient_recipes_are_dropped() {
        let result = pantry_match(vec![recipe("Rice", &[])], &list(&["rice"]));

        assert!(result.is_empty());
    }

    #[test]
    fn test_sorted_by_coverage_and_capped() {
        let mut candidates = vec![recipe("Rice Bowl", &["rice", "egg", "nori", "sesame"])];
        candidates.extend((0..15).map(|i| recipe(&format!("Egg Rice {i}"), &["rice", "egg"])));

        let result = pantry_match(candidates, &list(&["rice", "egg"]));

        assert_eq!(result.len(), MAX_RESULTS);
        assert!(result.iter().all(|r| r.ingredient_match.match_percentage == 100));
    }
}
