use tracing::debug;

use crate::catalog::{Catalog, CategoryFilter};
use crate::error::Result;
use crate::models::{FoodItem, Nutrient, Totals};
use crate::state::{Favorites, FavoritesStore, SelectionManager};

/// Everything one calculator session shows: selection, favorites, and the
/// current search/category filter.
pub struct Session<'a, S: FavoritesStore> {
    catalog: &'a Catalog,
    selection: SelectionManager<'a>,
    favorites: Favorites<S>,
    search_term: String,
    category: CategoryFilter,
}

impl<'a, S: FavoritesStore> Session<'a, S> {
    /// Start a session with an empty selection and favorites restored from `store`.
    pub fn new(catalog: &'a Catalog, store: S) -> Self {
        Self {
            catalog,
            selection: SelectionManager::new(catalog),
            favorites: Favorites::load(store),
            search_term: String::new(),
            category: CategoryFilter::All,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn set_quantity(&mut self, name: &str, delta: i64) -> bool {
        self.selection.set_quantity(name, delta)
    }

    pub fn apply_preset(&mut self, preset_name: &str) -> Result<()> {
        self.selection.apply_preset(preset_name)
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Toggle a catalog item's favorite flag.
    ///
    /// Returns `Ok(None)` without touching the store for names outside the
    /// catalog, otherwise whether the item is now a favorite.
    pub fn toggle_favorite(&mut self, name: &str) -> Result<Option<bool>> {
        if !self.catalog.contains(name) {
            debug!(item = name, "ignoring favorite toggle for unknown item");
            return Ok(None);
        }
        self.favorites.toggle(name).map(Some)
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    pub fn favorites(&self) -> &Favorites<S> {
        &self.favorites
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Items passing the current search term and category.
    pub fn visible_items(&self) -> Vec<&'a FoodItem> {
        self.catalog.visible_items(&self.search_term, &self.category)
    }

    pub fn quantity(&self, name: &str) -> u32 {
        self.selection.quantity(name)
    }

    pub fn totals(&self) -> &Totals {
        self.selection.totals()
    }

    pub fn recent(&self) -> &[String] {
        self.selection.recent()
    }

    pub fn selection(&self) -> &SelectionManager<'a> {
        &self.selection
    }

    pub fn daily_value_percentage(&self, nutrient: Nutrient, value: f64) -> String {
        self.catalog.daily_value_percentage(nutrient, value)
    }
}
