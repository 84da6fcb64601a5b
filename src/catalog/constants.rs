use std::sync::LazyLock;

use crate::catalog::{DailyValues, Preset};
use crate::models::FoodItem;

/// Category option that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Minimum Jaro-Winkler similarity for a fuzzy item suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions offered.
pub const MAX_SUGGESTIONS: usize = 5;

/// Maximum length of the recent selections row.
pub const MAX_RECENT: usize = 5;

fn item(
    name: &str,
    category: &str,
    [calories, protein, carbs, fat, sodium, sugar, fiber]: [f64; 7],
) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        category: category.to_string(),
        calories,
        protein,
        carbs,
        fat,
        sodium,
        sugar,
        fiber,
    }
}

/// Built-in menu.
///
/// Columns: calories, protein, carbs, fat, sodium (mg), sugar, fiber.
pub static BUILTIN_ITEMS: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    vec![
        item("Hamburger", "Burgers", [250.0, 12.0, 31.0, 9.0, 480.0, 4.0, 2.0]),
        item("Cheeseburger", "Burgers", [300.0, 15.0, 33.0, 12.0, 750.0, 6.0, 2.0]),
        item("French Fries", "Sides", [220.0, 3.0, 29.0, 11.0, 190.0, 0.0, 3.0]),
        item(
            "Chicken Nuggets (6pc)",
            "Chicken",
            [280.0, 13.0, 18.0, 17.0, 540.0, 0.0, 1.0],
        ),
        item("Soda (16oz)", "Beverages", [180.0, 0.0, 45.0, 0.0, 30.0, 45.0, 0.0]),
        item("Garden Salad", "Salads", [120.0, 8.0, 10.0, 7.0, 380.0, 4.0, 4.0]),
        item(
            "Grilled Chicken Sandwich",
            "Chicken",
            [380.0, 28.0, 39.0, 12.0, 680.0, 6.0, 3.0],
        ),
        item("Apple Pie", "Desserts", [250.0, 2.0, 32.0, 13.0, 170.0, 15.0, 1.0]),
    ]
});

/// Built-in meal presets, in button order.
pub static BUILTIN_PRESETS: LazyLock<Vec<Preset>> = LazyLock::new(|| {
    vec![
        Preset::new("Classic Combo", &["Hamburger", "French Fries", "Soda (16oz)"]),
        Preset::new("Healthy Choice", &["Grilled Chicken Sandwich", "Garden Salad"]),
        Preset::new(
            "Chicken Lover",
            &["Chicken Nuggets (6pc)", "French Fries", "Soda (16oz)"],
        ),
    ]
});

/// Recommended daily intake used as the percentage denominator.
pub const BUILTIN_DAILY_VALUES: DailyValues = DailyValues {
    calories: 2000.0,
    protein: 50.0,
    carbs: 275.0,
    fat: 78.0,
    sodium: 2300.0,
    sugar: 50.0,
    fiber: 28.0,
};
