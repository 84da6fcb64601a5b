pub mod food;
pub mod nutrient;
pub mod totals;

pub use food::FoodItem;
pub use nutrient::Nutrient;
pub use totals::Totals;
