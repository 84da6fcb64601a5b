use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::error::Result;

/// Durable storage for the favorites set.
pub trait FavoritesStore {
    /// Read the persisted set. A store with nothing saved returns an empty set.
    fn load(&self) -> Result<BTreeSet<String>>;

    /// Replace the persisted set.
    fn save(&mut self, favorites: &BTreeSet<String>) -> Result<()>;
}

/// In-memory store, used by tests and when persistence is disabled.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    saved: Option<BTreeSet<String>>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `names`.
    pub fn with_favorites<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            saved: Some(names.into_iter().map(Into::into).collect()),
            saves: 0,
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> Option<&BTreeSet<String>> {
        self.saved.as_ref()
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Result<BTreeSet<String>> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, favorites: &BTreeSet<String>) -> Result<()> {
        self.saved = Some(favorites.clone());
        self.saves += 1;
        Ok(())
    }
}

/// The favorites set, written through to its store on every change.
pub struct Favorites<S: FavoritesStore> {
    store: S,
    names: BTreeSet<String>,
}

impl<S: FavoritesStore> Favorites<S> {
    /// Restore favorites from `store`.
    ///
    /// A store that cannot be read (for example, a malformed file) yields an
    /// empty set instead of an error.
    pub fn load(store: S) -> Self {
        let names = match store.load() {
            Ok(names) => names,
            Err(e) => {
                warn!(error = %e, "could not restore favorites, starting empty");
                BTreeSet::new()
            }
        };
        Self { store, names }
    }

    /// Add `name` if absent, remove it if present, then persist.
    ///
    /// Returns whether `name` is a favorite afterwards. If the save fails the
    /// in-memory set is rolled back so it still matches the store.
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        let now_favorite = self.flip(name);

        if let Err(e) = self.store.save(&self.names) {
            self.flip(name);
            return Err(e);
        }
        info!(item = name, favorite = now_favorite, "favorites saved");
        Ok(now_favorite)
    }

    fn flip(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
