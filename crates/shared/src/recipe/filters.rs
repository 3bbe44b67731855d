use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use super::Recipe;

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CookingTime {
    #[strum(serialize = "15")]
    Quick,
    #[strum(serialize = "30")]
    Standard,
    #[strum(serialize = "60")]
    Long,
}

impl CookingTime {
    pub fn minutes(self) -> u32 {
        match self {
            CookingTime::Quick => 15,
            CookingTime::Standard => 30,
            CookingTime::Long => 60,
        }
    }
}

/// Request filters. Only presence is checked, values are free text.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct Filters {
    pub cooking_time: Option<String>,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub dietary_style: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("any"))
}

fn same_or_unset(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match (wanted, actual) {
        (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual.trim()),
        _ => true,
    }
}

impl Filters {
    /// Drops blank and "any" values so callers only ever see meaningful filters.
    pub fn normalized(self) -> Self {
        Self {
            cooking_time: present(self.cooking_time),
            cuisine: present(self.cuisine),
            meal_type: present(self.meal_type),
            dietary_style: present(self.dietary_style),
        }
    }

    pub fn cooking_time(&self) -> Option<CookingTime> {
        self.cooking_time.as_deref().and_then(|v| v.parse().ok())
    }

    pub fn is_breakfast(&self) -> bool {
        self.meal_type
            .as_deref()
            .is_some_and(|m| m.trim().eq_ignore_ascii_case("breakfast"))
    }

    /// Whether an externally sourced recipe satisfies these filters.
    ///
    /// Recipes that do not carry a value for a filtered field are kept,
    /// cooking time acts as an upper bound.
    pub fn admits(&self, recipe: &Recipe) -> bool {
        let within_time = match self.cooking_time() {
            Some(limit) => recipe.cooking_time == 0 || recipe.cooking_time <= limit.minutes(),
            None => true,
        };

        within_time
            && same_or_unset(self.cuisine.as_deref(), recipe.cuisine.as_deref())
            && same_or_unset(self.meal_type.as_deref(), recipe.meal_type.as_deref())
            && same_or_unset(
                self.dietary_style.as_deref(),
                recipe.dietary_style.as_deref(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(cooking_time: u32, cuisine: Option<&str>) -> Recipe {
        Recipe {
            cooking_time,
            cuisine: cuisine.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalized_drops_blank_values() {
        let filters = Filters {
            cooking_time: Some(" ".to_owned()),
            cuisine: Some(" Italian ".to_owned()),
            meal_type: Some("any".to_owned()),
            dietary_style: None,
        }
        .normalized();

        assert_eq!(filters.cooking_time, None);
        assert_eq!(filters.cuisine.as_deref(), Some("Italian"));
        assert_eq!(filters.meal_type, None);
    }

    #[test]
    fn test_cooking_time_parsing() {
        let mut filters = Filters {
            cooking_time: Some("15".to_owned()),
            ..Default::default()
        };
        assert_eq!(filters.cooking_time(), Some(CookingTime::Quick));

        filters.cooking_time = Some("45".to_owned());
        assert_eq!(filters.cooking_time(), None);
    }

    #[test]
    fn test_admits_cooking_time_as_upper_bound() {
        let filters = Filters {
            cooking_time: Some("30".to_owned()),
            ..Default::default()
        };

        assert!(filters.admits(&recipe(25, None)));
        assert!(!filters.admits(&recipe(45, None)));
        assert!(filters.admits(&recipe(0, None)));
    }

    #[test]
    fn test_admits_cuisine_case_insensitive_and_missing() {
        let filters = Filters {
            cuisine: Some("italian".to_owned()),
            ..Default::default()
        };

        assert!(filters.admits(&recipe(20, Some("Italian"))));
        assert!(filters.admits(&recipe(20, None)));
        assert!(!filters.admits(&recipe(20, Some("Mexican"))));
    }

    #[test]
    fn test_admits_dietary_style() {
        let filters = Filters {
            dietary_style: Some("Vegan".to_owned()),
            ..Default::default()
        };
        let mut vegan = recipe(20, None);
        vegan.dietary_style = Some("vegan".to_owned());
        let mut keto = recipe(20, None);
        keto.dietary_style = Some("Keto".to_owned());

        assert!(filters.admits(&vegan));
        assert!(filters.admits(&recipe(20, None)));
        assert!(!filters.admits(&keto));
    }
}
