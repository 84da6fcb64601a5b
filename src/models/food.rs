use serde::{Deserialize, Serialize};

use crate::models::Nutrient;

/// A menu item with its nutrition facts per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Milligrams.
    pub sodium: f64,
    pub sugar: f64,
    pub fiber: f64,
}

impl FoodItem {
    /// Amount of one nutrient in a single serving.
    #[inline]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Sodium => self.sodium,
            Nutrient::Sugar => self.sugar,
            Nutrient::Fiber => self.fiber,
        }
    }

    /// Basic validation: a non-empty name and finite, non-negative nutrients.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && Nutrient::ALL.into_iter().all(|n| {
                let v = self.nutrient(n);
                v.is_finite() && v >= 0.0
            })
    }

    /// Canonical key for case-insensitive lookups.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
