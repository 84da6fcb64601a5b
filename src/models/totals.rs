use crate::models::{FoodItem, Nutrient};

/// Aggregated nutrient amounts for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sodium: f64,
    pub sugar: f64,
    pub fiber: f64,
}

impl Totals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
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

    /// Add `quantity` servings of `item`.
    pub fn add_servings(&mut self, item: &FoodItem, quantity: u32) {
        let q = quantity as f64;
        self.calories += item.calories * q;
        self.protein += item.protein * q;
        self.carbs += item.carbs * q;
        self.fat += item.fat * q;
        self.sodium += item.sodium * q;
        self.sugar += item.sugar * q;
        self.fiber += item.fiber * q;
    }

    /// `(nutrient, amount)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }
}
