use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use crate::catalog::constants::{
    ALL_CATEGORIES, BUILTIN_ITEMS, BUILTIN_PRESETS, FUZZY_MATCH_THRESHOLD, MAX_SUGGESTIONS,
};
use crate::catalog::DailyValues;
use crate::error::{NutriError, Result};
use crate::models::{FoodItem, Nutrient};

/// A named shortcut that selects one serving of each listed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub items: Vec<String>,
}

impl Preset {
    pub fn new(name: &str, items: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Category selector state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"All"` disables filtering; anything else selects that exact category.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(selected) => selected,
        }
    }
}

/// On-disk layout of a custom catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<FoodItem>,
    #[serde(default)]
    presets: Vec<Preset>,
    #[serde(default)]
    daily_values: DailyValues,
}

/// The immutable menu: items, presets, and daily targets.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<FoodItem>,
    /// Item name to position in `items`.
    index: HashMap<String, usize>,
    presets: Vec<Preset>,
    daily_values: DailyValues,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or invalid items, presets that
    /// name items outside the catalog, and non-positive daily targets.
    pub fn new(
        items: Vec<FoodItem>,
        presets: Vec<Preset>,
        daily_values: DailyValues,
    ) -> Result<Self> {
        daily_values.validate()?;

        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if !item.is_valid() {
                return Err(NutriError::InvalidItem(item.name.clone()));
            }
            if index.insert(item.name.clone(), i).is_some() {
                return Err(NutriError::DuplicateItem(item.name.clone()));
            }
        }

        let mut preset_names = HashSet::new();
        for preset in &presets {
            if !preset_names.insert(preset.name.as_str()) {
                return Err(NutriError::InvalidInput(format!(
                    "duplicate preset '{}'",
                    preset.name
                )));
            }
            if let Some(missing) = preset.items.iter().find(|n| !index.contains_key(*n)) {
                return Err(NutriError::UnknownPresetItem {
                    preset: preset.name.clone(),
                    item: missing.clone(),
                });
            }
        }

        debug!(
            items = items.len(),
            presets = presets.len(),
            "catalog validated"
        );

        Ok(Self {
            items,
            index,
            presets,
            daily_values,
        })
    }

    /// The built-in fast-food menu.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_ITEMS.clone(),
            BUILTIN_PRESETS.clone(),
            DailyValues::default(),
        )
        .unwrap_or_else(|e| unreachable!("built-in catalog is invalid: {e}"))
    }

    /// Load a catalog from a JSON file.
    ///
    /// `presets` and `daily_values` are optional; missing daily values fall
    /// back to the built-in table.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.items, file.presets, file.daily_values)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Look up an item by its exact name.
    pub fn item(&self, name: &str) -> Option<&FoodItem> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn daily_values(&self) -> &DailyValues {
        &self.daily_values
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Selector options: `"All"` followed by every category.
    pub fn category_options(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories())
            .collect()
    }

    /// Items whose name contains `search_term` (case-insensitive) and whose
    /// category passes `filter`, in catalog order.
    pub fn visible_items(&self, search_term: &str, filter: &CategoryFilter) -> Vec<&FoodItem> {
        let needle = search_term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.key().contains(&needle) && filter.matches(&item.category))
            .collect()
    }

    /// `value` as a percent of the daily target, one decimal place.
    pub fn daily_value_percentage(&self, nutrient: Nutrient, value: f64) -> String {
        self.daily_values.percentage(nutrient, value)
    }

    /// Candidate items for free-form user input.
    ///
    /// An exact case-insensitive match wins outright; otherwise returns
    /// Jaro-Winkler matches above the threshold, best first.
    pub fn suggest(&self, input: &str) -> Vec<&FoodItem> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        if let Some(item) = self.items.iter().find(|item| item.key() == needle) {
            return vec![item];
        }

        let mut candidates: Vec<(&FoodItem, f64)> = self
            .items
            .iter()
            .map(|item| (item, jaro_winkler(&item.key(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(item, _)| item)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
