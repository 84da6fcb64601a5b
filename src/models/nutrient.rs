use std::fmt;
use std::str::FromStr;

use crate::error::NutriError;

/// A tracked nutrient, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Sodium,
    Sugar,
    Fiber,
}

impl Nutrient {
    pub const ALL: [Nutrient; 7] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Sodium,
        Nutrient::Sugar,
        Nutrient::Fiber,
    ];

    /// Lowercase key used in JSON and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Sodium => "sodium",
            Nutrient::Sugar => "sugar",
            Nutrient::Fiber => "fiber",
        }
    }

    /// Display unit for amounts of this nutrient.
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }

    /// Capitalized label for the totals panel.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Sodium => "Sodium",
            Nutrient::Sugar => "Sugar",
            Nutrient::Fiber => "Fiber",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nutrient {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Nutrient::ALL
            .into_iter()
            .find(|n| n.name() == key)
            .ok_or_else(|| NutriError::UnknownNutrient(s.to_string()))
    }
}
