use viralcarrot_shared::recipe::Nutrition;

use crate::matcher::normalize;

/// Finds the entry whose category names the food, in either direction.
///
/// Matching is case-insensitive; the reverse direction ("egg" naming the
/// "eggs" category) needs at least three characters.
pub fn lookup<'a, T>(table: &'a [(&'static str, T)], food: &str) -> Option<&'a (&'static str, T)> {
    let food = normalize(food);
    if food.is_empty() {
        return None;
    }

    table
        .iter()
        .find(|(category, _)| food.contains(category) || (food.len() >= 3 && category.contains(&food)))
}

pub fn category(food: &str) -> Option<&'static str> {
    lookup(TITLE_TEMPLATES, food).map(|(category, _)| *category)
}

pub const TITLE_TEMPLATES: &[(&str, [&str; 10])] = &[
    (
        "chicken",
        [
            "Garlic Butter Chicken",
            "Honey Glazed Chicken",
            "Crispy Lemon Chicken",
            "Creamy Tuscan Chicken",
            "Herb Roasted Chicken",
            "Chicken Stir Fry",
            "Spicy Chicken Skillet",
            "Chicken and Vegetable Bake",
            "Sticky Sesame Chicken",
            "One-Pan Chicken Dinner",
        ],
    ),
    (
        "beef",
        [
            "Classic Beef Stew",
            "Peppered Beef Stir Fry",
            "Garlic Steak Bites",
            "Beef and Broccoli",
            "Slow Braised Beef",
            "Korean Beef Bowl",
            "Beef Tacos",
            "Herb Crusted Beef",
            "Beef Skillet Supper",
            "Smoky Beef Chili",
        ],
    ),
    (
        "pork",
        [
            "Honey Garlic Pork Chops",
            "Pulled Pork",
            "Crispy Pork Belly",
            "Pork Tenderloin Medallions",
            "Sweet and Sour Pork",
            "Pork Carnitas",
            "Maple Glazed Pork",
            "Pork Stir Fry",
            "Herb Roasted Pork Loin",
            "Pork and Apple Skillet",
        ],
    ),
    (
        "salmon",
        [
            "Lemon Dill Salmon",
            "Teriyaki Salmon",
            "Honey Mustard Salmon",
            "Blackened Salmon",
            "Garlic Butter Salmon",
            "Maple Glazed Salmon",
            "Salmon Rice Bowl",
            "Herb Crusted Salmon",
            "Sheet Pan Salmon",
            "Miso Glazed Salmon",
        ],
    ),
    (
        "shrimp",
        [
            "Garlic Butter Shrimp",
            "Shrimp Scampi",
            "Spicy Shrimp Tacos",
            "Coconut Shrimp",
            "Shrimp Fried Rice",
            "Cajun Shrimp Skillet",
            "Honey Lime Shrimp",
            "Shrimp and Grits",
            "Lemon Pepper Shrimp",
            "Shrimp Stir Fry",
        ],
    ),
    (
        "fish",
        [
            "Pan Seared Fish",
            "Crispy Fish Tacos",
            "Lemon Herb Fish",
            "Baked Fish Fillets",
            "Fish Curry",
            "Garlic Butter Fish",
            "Beer Battered Fish",
            "Mediterranean Fish Bake",
            "Fish and Chips",
            "Blackened Fish",
        ],
    ),
    (
        "pasta",
        [
            "Creamy Garlic Pasta",
            "Pasta Primavera",
            "Spicy Arrabbiata Pasta",
            "Lemon Butter Pasta",
            "Pesto Pasta",
            "One-Pot Pasta",
            "Baked Pasta",
            "Pasta Aglio e Olio",
            "Tomato Basil Pasta",
            "Mushroom Cream Pasta",
        ],
    ),
    (
        "rice",
        [
            "Vegetable Fried Rice",
            "Cilantro Lime Rice",
            "Spanish Rice",
            "Coconut Rice",
            "Rice Pilaf",
            "Garlic Butter Rice",
            "Mushroom Risotto",
            "Loaded Rice Bowl",
            "Lemon Herb Rice",
            "Cheesy Rice Bake",
        ],
    ),
    (
        "tofu",
        [
            "Crispy Tofu",
            "Tofu Stir Fry",
            "General Tso's Tofu",
            "Sesame Ginger Tofu",
            "Tofu Scramble",
            "Teriyaki Tofu",
            "Spicy Peanut Tofu",
            "Tofu Curry",
            "Baked Tofu Bites",
            "Tofu Buddha Bowl",
        ],
    ),
    (
        "eggs",
        [
            "Fluffy Scrambled Eggs",
            "Classic Omelette",
            "Shakshuka",
            "Egg Fried Rice",
            "Deviled Eggs",
            "Veggie Frittata",
            "Eggs Benedict",
            "Baked Eggs",
            "Egg Muffins",
            "Egg and Cheese Scramble",
        ],
    ),
    (
        "potato",
        [
            "Crispy Roasted Potatoes",
            "Creamy Mashed Potatoes",
            "Loaded Baked Potatoes",
            "Garlic Parmesan Potatoes",
            "Potato Gratin",
            "Golden Hash Browns",
            "Potato Wedges",
            "Smashed Potatoes",
            "Potato Curry",
            "Herb Potato Salad",
        ],
    ),
    (
        "mushroom",
        [
            "Garlic Butter Mushrooms",
            "Stuffed Mushrooms",
            "Creamy Mushroom Skillet",
            "Mushroom Stroganoff",
            "Balsamic Mushrooms",
            "Mushroom Stir Fry",
            "Wild Mushroom Risotto",
            "Grilled Portobello",
            "Mushroom Tacos",
            "Mushroom Soup",
        ],
    ),
    (
        "lamb",
        [
            "Rosemary Lamb Chops",
            "Lamb Curry",
            "Slow Roasted Lamb",
            "Lamb Kofta",
            "Moroccan Lamb Stew",
            "Garlic Herb Lamb",
            "Lamb Gyros",
            "Braised Lamb Shanks",
            "Lamb Meatballs",
            "Mint Crusted Lamb",
        ],
    ),
    (
        "turkey",
        [
            "Herb Roasted Turkey",
            "Turkey Meatballs",
            "Turkey Chili",
            "Turkey Burgers",
            "Turkey Stir Fry",
            "Turkey Tacos",
            "Stuffed Turkey Peppers",
            "Turkey Skillet",
            "Turkey Lettuce Wraps",
            "Lemon Garlic Turkey",
        ],
    ),
    (
        "beans",
        [
            "Hearty Bean Chili",
            "Black Bean Tacos",
            "Smoky Baked Beans",
            "White Bean Stew",
            "Bean Burritos",
            "Three Bean Salad",
            "Red Beans and Rice",
            "Tuscan Bean Soup",
            "Bean and Veggie Bowl",
            "Refried Beans",
        ],
    ),
    (
        "quinoa",
        [
            "Quinoa Power Bowl",
            "Lemon Herb Quinoa",
            "Quinoa Stuffed Peppers",
            "Mediterranean Quinoa Salad",
            "Quinoa Fried Rice",
            "Black Bean Quinoa",
            "Quinoa Patties",
            "Quinoa Pilaf",
            "Greek Quinoa Bowl",
            "Quinoa Veggie Stir Fry",
        ],
    ),
    (
        "vegetables",
        [
            "Roasted Vegetable Medley",
            "Vegetable Stir Fry",
            "Garden Vegetable Soup",
            "Grilled Vegetable Platter",
            "Vegetable Curry",
            "Ratatouille",
            "Vegetable Lasagna",
            "Sheet Pan Vegetables",
            "Vegetable Fritters",
            "Veggie Buddha Bowl",
        ],
    ),
];

/// `{Food}` is replaced by the title-cased main food.
pub const GENERIC_TITLE_TEMPLATES: [&str; 10] = [
    "Delicious {Food} Recipe",
    "Easy {Food} Dinner",
    "Homestyle {Food}",
    "Simple {Food} Skillet",
    "Savory {Food} Bake",
    "Quick {Food} Stir Fry",
    "Rustic {Food} Stew",
    "Weeknight {Food}",
    "Golden {Food} Bites",
    "Hearty {Food} Bowl",
];

pub const COOKING_METHODS: [&str; 12] = [
    "Pan-Seared",
    "Oven-Roasted",
    "Grilled",
    "Slow-Cooked",
    "Air-Fried",
    "Braised",
    "Sautéed",
    "Baked",
    "Stir-Fried",
    "Smoked",
    "Roasted",
    "Crispy",
];

pub const FLAVOR_ENHANCERS: [&str; 10] = [
    "Garlic Herb",
    "Honey Lemon",
    "Spicy",
    "Smoky",
    "Zesty",
    "Creamy",
    "Sweet Chili",
    "Lemon Pepper",
    "Balsamic",
    "Cajun",
];

pub const CUISINE_MODIFIERS: &[(&str, &[&str])] = &[
    ("italian", &["Tuscan", "Sicilian", "Roman"]),
    ("mexican", &["Mexican-Style", "Oaxacan", "Baja"]),
    ("chinese", &["Szechuan", "Cantonese", "Hunan"]),
    ("japanese", &["Teriyaki", "Miso", "Katsu"]),
    ("korean", &["Korean BBQ", "Gochujang", "Bulgogi-Style"]),
    ("thai", &["Thai Basil", "Red Curry", "Lemongrass"]),
    ("indian", &["Tandoori", "Masala", "Butter"]),
    ("asian", &["Asian-Inspired", "Sesame Ginger", "Five-Spice"]),
    ("mediterranean", &["Mediterranean", "Greek", "Aegean"]),
    ("french", &["Provençal", "Dijon", "Bistro"]),
    ("middle eastern", &["Za'atar", "Shawarma-Spiced", "Harissa"]),
    ("american", &["Southern", "BBQ", "Classic American"]),
];

pub const COMMON_INGREDIENTS: &[(&str, &[&str])] = &[
    ("chicken", &["chicken", "olive oil", "salt", "black pepper", "garlic", "onion"]),
    ("beef", &["beef", "olive oil", "salt", "black pepper", "garlic", "onion"]),
    ("pork", &["pork", "olive oil", "salt", "black pepper", "garlic", "apple cider vinegar"]),
    ("salmon", &["salmon", "olive oil", "salt", "black pepper", "lemon", "dill"]),
    ("shrimp", &["shrimp", "butter", "garlic", "salt", "black pepper", "lemon"]),
    ("fish", &["fish fillets", "olive oil", "salt", "black pepper", "lemon", "parsley"]),
    ("pasta", &["pasta", "olive oil", "garlic", "parmesan cheese", "salt", "black pepper"]),
    ("rice", &["rice", "vegetable oil", "onion", "garlic", "salt", "soy sauce"]),
    ("tofu", &["firm tofu", "soy sauce", "sesame oil", "garlic", "ginger", "green onions"]),
    ("eggs", &["eggs", "butter", "salt", "black pepper", "milk", "chives"]),
    ("potato", &["potatoes", "olive oil", "salt", "black pepper", "garlic", "rosemary"]),
    ("mushroom", &["mushrooms", "butter", "garlic", "thyme", "salt", "black pepper"]),
    ("lamb", &["lamb", "olive oil", "rosemary", "garlic", "salt", "black pepper"]),
    ("turkey", &["ground turkey", "olive oil", "onion", "garlic", "salt", "black pepper"]),
    ("beans", &["beans", "onion", "garlic", "cumin", "vegetable broth", "salt"]),
    ("quinoa", &["quinoa", "vegetable broth", "olive oil", "lemon", "salt", "parsley"]),
    ("vegetables", &["mixed vegetables", "olive oil", "garlic", "salt", "black pepper", "herbs"]),
];

/// Staples used when the main food has no category; the main food is put first.
pub const GENERIC_INGREDIENTS: [&str; 4] = ["olive oil", "salt", "black pepper", "garlic"];

pub const CUISINE_INGREDIENTS: &[(&str, &[&str])] = &[
    ("italian", &["basil", "parmesan cheese", "oregano"]),
    ("mexican", &["cumin", "lime", "cilantro"]),
    ("chinese", &["soy sauce", "ginger", "scallions"]),
    ("japanese", &["soy sauce", "mirin", "rice vinegar"]),
    ("korean", &["gochujang", "sesame oil", "garlic"]),
    ("thai", &["fish sauce", "lime", "thai basil"]),
    ("indian", &["garam masala", "turmeric", "cumin"]),
    ("asian", &["soy sauce", "ginger", "sesame oil"]),
    ("mediterranean", &["lemon", "oregano", "feta cheese"]),
    ("french", &["butter", "thyme", "shallots"]),
    ("middle eastern", &["cumin", "sumac", "tahini"]),
    ("american", &["paprika", "butter"]),
];

pub const NUTRITION: &[(&str, Nutrition)] = &[
    ("chicken", Nutrition::new(250, 30, 5, 10)),
    ("beef", Nutrition::new(300, 28, 5, 18)),
    ("pork", Nutrition::new(280, 26, 5, 16)),
    ("salmon", Nutrition::new(280, 25, 2, 18)),
    ("shrimp", Nutrition::new(200, 24, 3, 8)),
    ("fish", Nutrition::new(220, 24, 3, 9)),
    ("pasta", Nutrition::new(350, 12, 60, 8)),
    ("rice", Nutrition::new(300, 6, 55, 5)),
    ("tofu", Nutrition::new(180, 16, 8, 10)),
    ("eggs", Nutrition::new(200, 14, 4, 14)),
    ("potato", Nutrition::new(250, 5, 45, 7)),
    ("mushroom", Nutrition::new(120, 5, 10, 6)),
    ("lamb", Nutrition::new(320, 25, 4, 22)),
    ("turkey", Nutrition::new(230, 28, 4, 9)),
    ("beans", Nutrition::new(260, 14, 40, 3)),
    ("quinoa", Nutrition::new(280, 10, 45, 6)),
    ("vegetables", Nutrition::new(150, 5, 20, 6)),
];

pub const GENERIC_NUTRITION: Nutrition = Nutrition::new(150, 10, 20, 5);

/// Upper bound of the random amount added to each nutrition field.
pub const NUTRITION_JITTER: Nutrition = Nutrition::new(200, 20, 30, 15);

pub const VEGETABLES: [&str; 12] = [
    "onion",
    "bell pepper",
    "carrot",
    "broccoli",
    "spinach",
    "tomato",
    "zucchini",
    "mushroom",
    "celery",
    "peas",
    "green beans",
    "kale",
];

pub const HARD_FOODS: [&str; 4] = ["octopus", "lamb", "beef wellington", "soufflé"];
