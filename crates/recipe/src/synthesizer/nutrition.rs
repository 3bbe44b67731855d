use viralcarrot_shared::recipe::Nutrition;

use super::tables::{GENERIC_NUTRITION, NUTRITION, NUTRITION_JITTER, lookup};
use crate::random::RandomSource;

/// Category base values plus random jitter. An estimate, not a measurement.
pub fn estimate_nutrition(main_food: &str, random: &mut dyn RandomSource) -> Nutrition {
    let base = lookup(NUTRITION, main_food)
        .map(|(_, nutrition)| *nutrition)
        .unwrap_or(GENERIC_NUTRITION);

    Nutrition {
        calories: base.calories + random.up_to(NUTRITION_JITTER.calories),
        protein: base.protein + random.up_to(NUTRITION_JITTER.protein),
        carbs: base.carbs + random.up_to(NUTRITION_JITTER.carbs),
        fat: base.fat + random.up_to(NUTRITION_JITTER.fat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SequenceRandom, ThreadRandom};

    #[test]
    fn test_zero_jitter_returns_base() {
        let nutrition = estimate_nutrition("salmon", &mut SequenceRandom::zero());

        assert_eq!(nutrition, Nutrition::new(280, 25, 2, 18));
    }

    #[test]
    fn test_generic_fallback() {
        let nutrition = estimate_nutrition("jackfruit", &mut SequenceRandom::zero());

        assert_eq!(nutrition, GENERIC_NUTRITION);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let mut random = ThreadRandom;

        for _ in 0..50 {
            let nutrition = estimate_nutrition("chicken", &mut random);
            assert!((250..=450).contains(&nutrition.calories));
            assert!((30..=50).contains(&nutrition.protein));
            assert!((5..=35).contains(&nutrition.carbs));
            assert!((10..=25).contains(&nutrition.fat));
        }
    }

    #[test]
    fn test_fixed_sequence_is_applied_in_field_order() {
        let nutrition = estimate_nutrition("tofu", &mut SequenceRandom::new(vec![100, 5, 10, 2]));

        assert_eq!(nutrition, Nutrition::new(280, 21, 18, 12));
    }
}
