use std::fs;

use nutriknow::catalog::Catalog;
use nutriknow::state::{Favorites, JsonFileStore, MemoryStore, Session, FAVORITES_KEY};
use tempfile::TempDir;

#[test]
fn test_toggle_twice_is_identity() {
    let mut favorites = Favorites::load(MemoryStore::with_favorites(["Apple Pie"]));
    let before = favorites.names().clone();

    favorites.toggle("Hamburger").unwrap();
    favorites.toggle("Hamburger").unwrap();
    assert_eq!(*favorites.names(), before);

    favorites.toggle("Apple Pie").unwrap();
    favorites.toggle("Apple Pie").unwrap();
    assert_eq!(*favorites.names(), before);
}

#[test]
fn test_favorites_survive_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    let catalog = Catalog::builtin();

    {
        let mut session = Session::new(&catalog, JsonFileStore::new(&path));
        session.toggle_favorite("Garden Salad").unwrap();
        session.toggle_favorite("Soda (16oz)").unwrap();
        session.toggle_favorite("Soda (16oz)").unwrap();
    }

    let session = Session::new(&catalog, JsonFileStore::new(&path));
    assert!(session.is_favorite("Garden Salad"));
    assert!(!session.is_favorite("Soda (16oz)"));
    assert_eq!(session.favorites().len(), 1);
}

#[test]
fn test_malformed_file_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    fs::write(&path, "[\"Hamburger\",").unwrap();

    let catalog = Catalog::builtin();
    let mut session = Session::new(&catalog, JsonFileStore::new(&path));
    assert!(session.favorites().is_empty());

    // The next toggle replaces the broken file.
    session.toggle_favorite("Hamburger").unwrap();
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[FAVORITES_KEY], serde_json::json!(["Hamburger"]));
}

#[test]
fn test_missing_file_starts_empty_without_creating_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested-absent.json");

    let catalog = Catalog::builtin();
    let session = Session::new(&catalog, JsonFileStore::new(&path));

    assert!(session.favorites().is_empty());
    assert!(!path.exists());
}
