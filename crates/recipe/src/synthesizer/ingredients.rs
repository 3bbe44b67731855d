use std::collections::HashSet;

use viralcarrot_shared::recipe::Filters;

use super::tables::{COMMON_INGREDIENTS, CUISINE_INGREDIENTS, GENERIC_INGREDIENTS, lookup};
use crate::matcher::normalize;

pub const MAX_INGREDIENTS: usize = 12;
pub const MAX_CUISINE_ADDITIONS: usize = 2;

fn staples(main_food: &str) -> Vec<String> {
    let food = main_food.trim();

    let Some((_, staples)) = lookup(COMMON_INGREDIENTS, food) else {
        return std::iter::once(food)
            .chain(GENERIC_INGREDIENTS)
            .map(str::to_owned)
            .collect();
    };

    let normalized = normalize(food);
    let names_food = staples
        .iter()
        .any(|s| s.contains(normalized.as_str()) || normalized.contains(s));

    let mut list: Vec<String> = staples.iter().map(|s| s.to_string()).collect();
    if !names_food {
        list.insert(0, food.to_owned());
    }

    list
}

/// Category staples, then the user's ingredients, then up to two cuisine
/// additions; duplicates removed ignoring case, capped at twelve.
pub fn generate_ingredients(
    main_food: &str,
    supporting: &[String],
    filters: &Filters,
) -> Vec<String> {
    let cuisine_additions = filters
        .cuisine
        .as_deref()
        .and_then(|cuisine| lookup(CUISINE_INGREDIENTS, cuisine))
        .map(|(_, additions)| additions.iter().take(MAX_CUISINE_ADDITIONS).map(|a| a.to_string()))
        .into_iter()
        .flatten();

    let mut seen = HashSet::new();

    staples(main_food)
        .into_iter()
        .chain(supporting.iter().map(|s| s.trim().to_owned()))
        .chain(cuisine_additions)
        .filter(|i| !i.is_empty())
        .filter(|i| seen.insert(normalize(i)))
        .take(MAX_INGREDIENTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_chicken_with_garlic_and_salt() {
        let ingredients =
            generate_ingredients("chicken", &list(&["garlic", "salt"]), &Filters::default());

        assert_eq!(
            ingredients,
            list(&["chicken", "olive oil", "salt", "black pepper", "garlic", "onion"])
        );
    }

    #[test]
    fn test_dedup_ignores_case() {
        let ingredients = generate_ingredients(
            "chicken",
            &list(&["Garlic", "Lemon", "lemon "]),
            &Filters::default(),
        );

        assert_eq!(
            ingredients,
            list(&["chicken", "olive oil", "salt", "black pepper", "garlic", "onion", "Lemon"])
        );
    }

    #[test]
    fn test_cuisine_adds_at_most_two() {
        let filters = Filters {
            cuisine: Some("Indian".to_owned()),
            ..Default::default()
        };
        let ingredients = generate_ingredients("lamb", &[], &filters);

        assert!(ingredients.contains(&"garam masala".to_owned()));
        assert!(ingredients.contains(&"turmeric".to_owned()));
        assert!(!ingredients.contains(&"cumin".to_owned()));
    }

    #[test]
    fn test_capped_at_twelve() {
        let supporting: Vec<String> = (0..20).map(|i| format!("spice {i}")).collect();
        let ingredients = generate_ingredients("beef", &supporting, &Filters::default());

        assert_eq!(ingredients.len(), MAX_INGREDIENTS);
        assert_eq!(ingredients[0], "beef");
    }

    #[test]
    fn test_unknown_food_leads_generic_staples() {
        let ingredients = generate_ingredients("Jackfruit", &[], &Filters::default());

        assert_eq!(
            ingredients,
            list(&["Jackfruit", "olive oil", "salt", "black pepper", "garlic"])
        );
    }

    #[test]
    fn test_main_food_added_when_staples_do_not_name_it() {
        let ingredients = generate_ingredients("sweet potato", &[], &Filters::default());

        assert_eq!(ingredients[0], "sweet potato");
        assert!(ingredients.contains(&"potatoes".to_owned()));
    }
}
