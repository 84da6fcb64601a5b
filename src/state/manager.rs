use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{Catalog, MAX_RECENT};
use crate::error::{NutriError, Result};
use crate::models::{FoodItem, Totals};

/// Fold the whole catalog against a selection.
pub fn compute_totals(catalog: &Catalog, selection: &HashMap<String, u32>) -> Totals {
    catalog
        .items()
        .iter()
        .fold(Totals::default(), |mut acc, item| {
            let quantity = selection.get(&item.name).copied().unwrap_or(0);
            acc.add_servings(item, quantity);
            acc
        })
}

/// Tracks chosen quantities, running totals, and recently added items for
/// one session.
pub struct SelectionManager<'a> {
    catalog: &'a Catalog,
    /// Item name to quantity; absent means 0.
    selection: HashMap<String, u32>,
    totals: Totals,
    /// Most recent first, no duplicates.
    recent: Vec<String>,
}

impl<'a> SelectionManager<'a> {
    /// Start with nothing selected.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selection: HashMap::new(),
            totals: Totals::default(),
            recent: Vec::new(),
        }
    }

    /// Adjust an item's quantity by `delta`, clamping at zero.
    ///
    /// Names outside the catalog are a no-op and return `false`.
    pub fn set_quantity(&mut self, name: &str, delta: i64) -> bool {
        if !self.catalog.contains(name) {
            debug!(item = name, delta, "ignoring quantity change for unknown item");
            return false;
        }

        let old = self.quantity(name);
        let new = i64::from(old)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX)) as u32;
        self.selection.insert(name.to_string(), new);

        if delta > 0 {
            self.push_recent(name);
        }

        self.recompute();
        debug!(item = name, old, new, "quantity updated");
        true
    }

    /// Replace the selection with one serving of each item in the preset.
    pub fn apply_preset(&mut self, preset_name: &str) -> Result<()> {
        let preset = self
            .catalog
            .preset(preset_name)
            .ok_or_else(|| NutriError::PresetNotFound(preset_name.to_string()))?;

        for item in self.catalog.items() {
            self.selection.insert(item.name.clone(), 0);
        }
        for name in &preset.items {
            self.selection.insert(name.clone(), 1);
        }

        self.recompute();
        debug!(preset = preset_name, "preset applied");
        Ok(())
    }

    /// Reset every quantity to zero. Recent selections are kept.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.recompute();
    }

    /// Current quantity for an item (0 if never selected or unknown).
    pub fn quantity(&self, name: &str) -> u32 {
        self.selection.get(name).copied().unwrap_or(0)
    }

    pub fn selection(&self) -> &HashMap<String, u32> {
        &self.selection
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    /// Items with a positive quantity, in catalog order.
    pub fn selected_items(&self) -> Vec<(&'a FoodItem, u32)> {
        self.catalog
            .items()
            .iter()
            .map(|item| (item, self.quantity(&item.name)))
            .filter(|(_, q)| *q > 0)
            .collect()
    }

    fn push_recent(&mut self, name: &str) {
        if self.recent.first().is_some_and(|front| front == name) {
            return;
        }
        self.recent.retain(|n| n != name);
        self.recent.insert(0, name.to_string());
        self.recent.truncate(MAX_RECENT);
    }

    fn recompute(&mut self) {
        self.totals = compute_totals(self.catalog, &self.selection);
    }
}
