use viralcarrot_shared::recipe::Filters;

use super::tables::{
    COOKING_METHODS, CUISINE_MODIFIERS, FLAVOR_ENHANCERS, GENERIC_TITLE_TEMPLATES,
    TITLE_TEMPLATES, lookup,
};

/// Capitalizes every word: "chicken thighs" becomes "Chicken Thighs".
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Skips the prefix when the base already starts its lead word, to avoid
/// titles such as "Garlic Herb Garlic Butter Chicken".
fn prefixed(prefix: &str, base: &str) -> String {
    let lead = prefix.split_whitespace().next().unwrap_or(prefix);
    if base.to_lowercase().contains(&lead.to_lowercase()) {
        return base.to_owned();
    }

    format!("{prefix} {base}")
}

fn base_template(main_food: &str, index: usize) -> String {
    match lookup(TITLE_TEMPLATES, main_food) {
        Some((_, templates)) => templates[index % templates.len()].to_owned(),
        None => GENERIC_TITLE_TEMPLATES[index % GENERIC_TITLE_TEMPLATES.len()]
            .replace("{Food}", &title_case(main_food)),
    }
}

fn cuisine_modifier(filters: &Filters, index: usize) -> Option<&'static str> {
    let cuisine = filters.cuisine.as_deref()?;
    let (_, modifiers) = lookup(CUISINE_MODIFIERS, cuisine)?;

    Some(modifiers[index % modifiers.len()])
}

/// Builds the title for the `index`-th recipe of a request.
///
/// Pure function of its inputs: `index mod len` picks the base template and
/// each prefix candidate, `index mod 7` picks how they are combined.
pub fn generate_title(main_food: &str, filters: &Filters, index: usize) -> String {
    let base = base_template(main_food, index);
    let method = COOKING_METHODS[index % COOKING_METHODS.len()];
    let flavor = FLAVOR_ENHANCERS[index % FLAVOR_ENHANCERS.len()];
    let modifier = cuisine_modifier(filters, index);

    match (index % 7, modifier) {
        (0, _) => base,
        (1, _) => prefixed(method, &base),
        (2, _) => prefixed(flavor, &base),
        (3, Some(modifier)) => prefixed(modifier, &base),
        (3, None) => prefixed(method, &prefixed(flavor, &base)),
        (4, _) => prefixed(flavor, &prefixed(method, &base)),
        (5, Some(modifier)) => prefixed(modifier, &prefixed(method, &base)),
        (5, None) => format!("Easy {}", prefixed(method, &base)),
        (_, _) => format!("{base} with {flavor} Sauce"),
    }
}
