pub mod constants;
pub mod daily;
pub mod menu;

pub use constants::*;
pub use daily::DailyValues;
pub use menu::{Catalog, CategoryFilter, Preset};
