pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use catalog::{Catalog, CategoryFilter};
pub use error::{NutriError, Result};
pub use models::{FoodItem, Nutrient, Totals};
