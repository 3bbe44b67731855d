use viralcarrot_shared::recipe::{CookingTime, Filters};

use super::tables::VEGETABLES;
use crate::matcher::normalize;

fn mentions(ingredients: &[String], needle: &str) -> bool {
    ingredients.iter().any(|i| normalize(i).contains(needle))
}

fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_owned(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}

/// Ordered cooking steps for a synthesized recipe.
pub fn generate_steps(main_food: &str, ingredients: &[String], filters: &Filters) -> Vec<String> {
    let food = normalize(main_food);
    let mut steps = vec![format!(
        "Prepare the {food}: rinse if needed, pat dry and cut into even, bite-sized pieces."
    )];

    if mentions(ingredients, "salt") && mentions(ingredients, "black pepper") {
        steps.push(format!(
            "Season the {food} generously with salt and black pepper."
        ));
    }

    steps.push(match filters.cooking_time() {
        Some(CookingTime::Quick) => format!(
            "Heat a drizzle of oil in a large skillet over medium-high heat and quick-sear the {food} for 3-4 minutes per side until golden and cooked through."
        ),
        Some(CookingTime::Standard) => format!(
            "Cook the {food} in a skillet over medium heat for 12-15 minutes, turning occasionally, until evenly browned and cooked through."
        ),
        _ => format!(
            "Preheat the oven to 400°F (200°C) and roast the {food} for 20-25 minutes until cooked through."
        ),
    });

    let vegetables: Vec<String> = ingredients
        .iter()
        .filter(|i| {
            let name = normalize(i);
            VEGETABLES.iter().any(|v| name.contains(v))
        })
        .map(|i| i.trim().to_owned())
        .collect();

    if !vegetables.is_empty() {
        steps.push(format!(
            "Add the {} and cook for 5-7 minutes until tender.",
            join_list(&vegetables)
        ));
    }

    steps.push(if mentions(ingredients, "lemon") {
        "Finish with a squeeze of fresh lemon juice and serve immediately.".to_owned()
    } else if mentions(ingredients, "herb") {
        "Garnish with fresh herbs and serve while hot.".to_owned()
    } else {
        "Let it rest for a couple of minutes, then serve warm.".to_owned()
    });

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn with_time(value: &str) -> Filters {
        Filters {
            cooking_time: Some(value.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_sequence_for_chicken() {
        let steps = generate_steps(
            "Chicken",
            &list(&["chicken", "olive oil", "salt", "black pepper", "garlic", "onion"]),
            &Filters::default(),
        );

        assert_eq!(steps.len(), 5);
        assert!(steps[0].starts_with("Prepare the chicken"));
        assert!(steps[1].starts_with("Season the chicken"));
        assert!(steps[2].contains("400°F (200°C)"));
        assert!(steps[2].contains("20-25 minutes"));
        assert_eq!(steps[3], "Add the onion and cook for 5-7 minutes until tender.");
        assert!(steps[4].starts_with("Let it rest"));
    }

    #[test]
    fn test_seasoning_needs_salt_and_pepper() {
        let steps = generate_steps("tofu", &list(&["firm tofu", "salt"]), &Filters::default());

        assert!(!steps.iter().any(|s| s.starts_with("Season")));
    }

    #[test]
    fn test_cooking_method_follows_cooking_time() {
        let quick = generate_steps("beef", &list(&["beef"]), &with_time("15"));
        let standard = generate_steps("beef", &list(&["beef"]), &with_time("30"));
        let long = generate_steps("beef", &list(&["beef"]), &with_time("60"));

        assert!(quick[1].contains("quick-sear"));
        assert!(standard[1].contains("medium heat for 12-15 minutes"));
        assert!(long[1].contains("roast"));
    }

    #[test]
    fn test_vegetables_are_listed() {
        let steps = generate_steps(
            "rice",
            &list(&["rice", "carrot", "Peas", "bell pepper"]),
            &Filters::default(),
        );

        assert!(steps.contains(&"Add the carrot, Peas and bell pepper and cook for 5-7 minutes until tender.".to_owned()));
    }

    #[test]
    fn test_finish_prefers_lemon_then_herbs() {
        let lemon = generate_steps("fish", &list(&["fish", "lemon", "herbs"]), &Filters::default());
        let herbs = generate_steps("fish", &list(&["fish", "herbs"]), &Filters::default());

        assert!(lemon.last().is_some_and(|s| s.contains("lemon juice")));
        assert!(herbs.last().is_some_and(|s| s.contains("fresh herbs")));
    }
}
