use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::state::FavoritesStore;

/// Key under which the favorites list is stored.
pub const FAVORITES_KEY: &str = "favorites";

/// A JSON object file used as a small key-value store.
///
/// Favorites live under [`FAVORITES_KEY`] as an array of item names. Other
/// keys in the file are left untouched on save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole object; a missing file is an empty object.
    fn read_entries(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no favorites file yet");
                return Ok(Map::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<BTreeSet<String>> {
        let mut entries = self.read_entries()?;
        match entries.remove(FAVORITES_KEY) {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(BTreeSet::new()),
        }
    }

    fn save(&mut self, favorites: &BTreeSet<String>) -> Result<()> {
        // An unreadable file is overwritten rather than blocking the save.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(FAVORITES_KEY.to_string(), serde_json::to_value(favorites)?);

        let json = serde_json::to_string_pretty(&Value::Object(entries))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("favorites.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        let mut store = JsonFileStore::new(&path);

        let favorites: BTreeSet<String> = ["Hamburger", "Apple Pie"]
            .into_iter()
            .map(String::from)
            .collect();
        store.save(&favorites).unwrap();

        let reloaded = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(reloaded, favorites);

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[FAVORITES_KEY], serde_json::json!(["Apple Pie", "Hamburger"]));
    }

    #[test]
    fn test_save_preserves_other_keys() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"theme": "dark", "favorites": ["Soda (16oz)"]}"#)
            .unwrap();

        let mut store = JsonFileStore::new(file.path());
        store.save(&BTreeSet::from(["Garden Salad".to_string()])).unwrap();

        let raw: Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw[FAVORITES_KEY], serde_json::json!(["Garden Salad"]));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let store = JsonFileStore::new(file.path());
        assert!(store.load().is_err());
    }

    #[test]
    fn test_wrong_shape_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"favorites": "Hamburger"}"#).unwrap();

        let store = JsonFileStore::new(file.path());
        assert!(store.load().is_err());
    }
}
