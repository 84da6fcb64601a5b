#[macro_use]
extern crate assert_float_eq;

use nutriknow::catalog::Catalog;
use nutriknow::models::{Nutrient, Totals};
use nutriknow::state::SelectionManager;

/// Weighted sum computed directly from the catalog, independent of the manager.
fn expected_totals(catalog: &Catalog, manager: &SelectionManager<'_>) -> Totals {
    let mut totals = Totals::default();
    for item in catalog.items() {
        let q = manager.quantity(&item.name) as f64;
        totals.calories += item.calories * q;
        totals.protein += item.protein * q;
        totals.carbs += item.carbs * q;
        totals.fat += item.fat * q;
        totals.sodium += item.sodium * q;
        totals.sugar += item.sugar * q;
        totals.fiber += item.fiber * q;
    }
    totals
}

fn assert_totals_match(catalog: &Catalog, manager: &SelectionManager<'_>) {
    let expected = expected_totals(catalog, manager);
    for nutrient in Nutrient::ALL {
        assert_float_absolute_eq!(
            manager.totals().get(nutrient),
            expected.get(nutrient),
            1e-9
        );
    }
}

#[test]
fn test_classic_combo_preset() {
    let catalog = Catalog::builtin();
    let mut manager = SelectionManager::new(&catalog);

    manager.apply_preset("Classic Combo").unwrap();

    for item in catalog.items() {
        let expected = match item.name.as_str() {
            "Hamburger" | "French Fries" | "Soda (16oz)" => 1,
            _ => 0,
        };
        assert_eq!(manager.quantity(&item.name), expected, "{}", item.name);
    }
    assert_float_absolute_eq!(manager.totals().calories, 650.0, 1e-9);
    assert_totals_match(&catalog, &manager);
}

#[test]
fn test_every_preset_selects_exactly_its_items() {
    let catalog = Catalog::builtin();
    let mut manager = SelectionManager::new(&catalog);

    for preset in catalog.presets() {
        manager.set_quantity("Apple Pie", 4);
        manager.apply_preset(&preset.name).unwrap();

        for item in catalog.items() {
            let expected = u32::from(preset.items.contains(&item.name));
            assert_eq!(
                manager.quantity(&item.name),
                expected,
                "{} under {}",
                item.name,
                preset.name
            );
        }
        assert_totals_match(&catalog, &manager);
    }
}

#[test]
fn test_decrement_below_zero_is_clamped() {
    let catalog = Catalog::builtin();
    let mut manager = SelectionManager::new(&catalog);

    manager.set_quantity("Hamburger", 1);
    manager.set_quantity("Hamburger", -5);

    assert_eq!(manager.quantity("Hamburger"), 0);
    assert_totals_match(&catalog, &manager);
}

#[test]
fn test_mixed_sequence_keeps_invariants() {
    let catalog = Catalog::builtin();
    let mut manager = SelectionManager::new(&catalog);
    let names: Vec<String> = catalog.items().iter().map(|i| i.name.clone()).collect();
    let deltas = [3, -1, 2, -4, 1, 1, -2, 5, -7, 1];

    for (step, delta) in deltas.iter().cycle().take(60).enumerate() {
        let name = &names[(step * 3) % names.len()];
        manager.set_quantity(name, *delta);

        if step % 17 == 0 {
            manager.apply_preset("Chicken Lover").unwrap();
        }

        assert_totals_match(&catalog, &manager);

        let recent = manager.recent();
        assert!(recent.len() <= 5);
        for (i, a) in recent.iter().enumerate() {
            assert!(!recent[i + 1..].contains(a), "duplicate {} in recents", a);
        }
    }
}

#[test]
fn test_extreme_deltas_stay_in_range() {
    let catalog = Catalog::builtin();
    let mut manager = SelectionManager::new(&catalog);

    manager.set_quantity("French Fries", 1);
    manager.set_quantity("French Fries", i64::MAX);
    assert_eq!(manager.quantity("French Fries"), u32::MAX);
    assert_totals_match(&catalog, &manager);

    manager.set_quantity("French Fries", i64::MAX);
    assert_eq!(manager.quantity("French Fries"), u32::MAX);

    manager.set_quantity("French Fries", i64::MIN);
    assert_eq!(manager.quantity("French Fries"), 0);

    manager.set_quantity("Garden Salad", i64::MIN);
    assert_eq!(manager.quantity("Garden Salad"), 0);
    manager.set_quantity("Garden Salad", 2);
    assert_eq!(manager.quantity("Garden Salad"), 2);
    assert_totals_match(&catalog, &manager);
}

#[test]
fn test_unknown_item_leaves_state_untouched() {
    let catalog = Catalog::builtin();
    let mut manager = SelectionManager::new(&catalog);
    manager.apply_preset("Healthy Choice").unwrap();
    let before = *manager.totals();

    assert!(!manager.set_quantity("Veggie Wrap", 2));
    assert!(!manager.set_quantity("hamburger", 1));

    assert_eq!(*manager.totals(), before);
    assert!(manager.recent().is_empty());
}

#[test]
fn test_most_recent_first() {
    let catalog = Catalog::builtin();
    let mut manager = SelectionManager::new(&catalog);

    for name in ["Hamburger", "Cheeseburger", "French Fries", "Garden Salad"] {
        manager.set_quantity(name, 1);
    }
    manager.set_quantity("Cheeseburger", 2);

    assert_eq!(
        manager.recent(),
        ["Cheeseburger", "Garden Salad", "French Fries", "Hamburger"]
    );
}
