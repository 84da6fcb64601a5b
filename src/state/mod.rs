mod favorites;
mod manager;
mod persistence;
mod session;

pub use favorites::{Favorites, FavoritesStore, MemoryStore};
pub use manager::{compute_totals, SelectionManager};
pub use persistence::{JsonFileStore, FAVORITES_KEY};
pub use session::Session;
