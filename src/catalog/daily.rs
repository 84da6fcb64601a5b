use serde::{Deserialize, Serialize};

use crate::catalog::constants::BUILTIN_DAILY_VALUES;
use crate::error::{NutriError, Result};
use crate::models::Nutrient;

/// Recommended daily intake per nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyValues {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sodium: f64,
    pub sugar: f64,
    pub fiber: f64,
}

impl Default for DailyValues {
    fn default() -> Self {
        BUILTIN_DAILY_VALUES
    }
}

impl DailyValues {
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

    /// Every target must be a finite positive number, since it is used as a divisor.
    pub fn validate(&self) -> Result<()> {
        for nutrient in Nutrient::ALL {
            let target = self.get(nutrient);
            if !(target.is_finite() && target > 0.0) {
                return Err(NutriError::InvalidDailyValue(nutrient.name().to_string()));
            }
        }
        Ok(())
    }

    /// Percent of the daily target. Not clamped; values above 100 are expected.
    pub fn percent(&self, nutrient: Nutrient, value: f64) -> f64 {
        (value / self.get(nutrient)) * 100.0
    }

    /// Percent of the daily target rendered to one decimal place, with
    /// halves rounded away from zero.
    pub fn percentage(&self, nutrient: Nutrient, value: f64) -> String {
        let rounded = (self.percent(nutrient, value) * 10.0).round() / 10.0;
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_one_decimal() {
        let dv = DailyValues::default();
        assert_eq!(dv.percentage(Nutrient::Protein, 50.0), "100.0");
        assert_eq!(dv.percentage(Nutrient::Calories, 650.0), "32.5");
        assert_eq!(dv.percentage(Nutrient::Fiber, 0.0), "0.0");
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        let dv = DailyValues::default();
        // 3.25% and 0.25% are exact ties.
        assert_eq!(dv.percentage(Nutrient::Protein, 1.625), "3.3");
        assert_eq!(dv.percentage(Nutrient::Sugar, 0.125), "0.3");
        assert_eq!(dv.percentage(Nutrient::Protein, 1.6), "3.2");
    }

    #[test]
    fn test_percentage_not_clamped() {
        let dv = DailyValues::default();
        assert_eq!(dv.percentage(Nutrient::Sugar, 90.0), "180.0");
    }

    #[test]
    fn test_validate_rejects_zero_target() {
        assert!(DailyValues::default().validate().is_ok());

        let dv = DailyValues {
            fiber: 0.0,
            ..DailyValues::default()
        };
        assert!(matches!(
            dv.validate(),
            Err(NutriError::InvalidDailyValue(ref n)) if n == "fiber"
        ));
    }
}
