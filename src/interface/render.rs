use crate::catalog::{Catalog, DailyValues};
use crate::models::{FoodItem, Totals};
use crate::state::{FavoritesStore, Session};

/// Marker shown next to favorite items.
const FAVORITE_MARK: &str = "♥";

/// Macronutrient line for an item row.
pub fn format_macros(item: &FoodItem) -> String {
    format!(
        "{} cal | P: {}g | C: {}g | F: {}g",
        item.calories, item.protein, item.carbs, item.fat
    )
}

/// Sodium, sugar, and fiber line for an item row.
pub fn format_micros(item: &FoodItem) -> String {
    format!(
        "Sodium: {}mg | Sugar: {}g | Fiber: {}g",
        item.sodium, item.sugar, item.fiber
    )
}

/// One totals-panel line per nutrient: amount, unit, and percent of daily value.
pub fn format_totals(totals: &Totals, daily_values: &DailyValues) -> Vec<String> {
    totals
        .iter()
        .map(|(nutrient, value)| {
            format!(
                "{:<9} {:>8} {:<4} {:>6}% Daily Value",
                nutrient.label(),
                value,
                nutrient.unit(),
                daily_values.percentage(nutrient, value)
            )
        })
        .collect()
}

/// Display the items visible under the session's current filter.
pub fn display_items<S: FavoritesStore>(session: &Session<'_, S>) {
    let items = session.visible_items();

    println!();
    println!(
        "=== Menu ({} items, search: '{}', category: {}) ===",
        items.len(),
        session.search_term(),
        session.category().label()
    );
    println!();

    if items.is_empty() {
        println!("  (no items match)");
        println!();
        return;
    }

    let width = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in items {
        let mark = if session.is_favorite(&item.name) {
            FAVORITE_MARK
        } else {
            " "
        };
        println!(
            "  {} {:<width$}  x{:<3} {}",
            mark,
            item.name,
            session.quantity(&item.name),
            format_macros(item),
            width = width
        );
        println!("    {:<width$}        {}", "", format_micros(item), width = width);
    }
    println!();
}

/// Display the nutrition totals panel.
pub fn display_totals(totals: &Totals, daily_values: &DailyValues) {
    println!();
    println!("=== Nutrition Totals ===");
    println!();
    for line in format_totals(totals, daily_values) {
        println!("  {}", line);
    }
    println!();
}

/// Display the current selection followed by its totals.
pub fn display_selection<S: FavoritesStore>(session: &Session<'_, S>) {
    let selected = session.selection().selected_items();

    println!();
    println!("=== Selection ===");
    if selected.is_empty() {
        println!("  (nothing selected)");
    }
    for (item, quantity) in selected {
        println!("  {:>3} x {}", quantity, item.name);
    }

    display_totals(session.totals(), session.catalog().daily_values());
}

/// Display preset names with their items.
pub fn display_presets(catalog: &Catalog) {
    if catalog.presets().is_empty() {
        println!("Presets: (none)");
        return;
    }

    println!();
    println!("=== Presets ===");
    for preset in catalog.presets() {
        println!("  {}: {}", preset.name, preset.items.join(", "));
    }
    println!();
}

/// Display the recent selections row.
pub fn display_recent(recent: &[String]) {
    if recent.is_empty() {
        return;
    }
    println!("Recent: {}", recent.join(" | "));
}

/// Display the category selector options.
pub fn display_categories(catalog: &Catalog) {
    for category in catalog.category_options() {
        println!("  {}", category);
    }
}

/// Display favorite item names.
pub fn display_favorites<'a>(names: impl Iterator<Item = &'a str>) {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        println!("Favorites: (none)");
        return;
    }
    println!("Favorites ({}):", names.len());
    for name in names {
        println!("  {} {}", FAVORITE_MARK, name);
    }
}
