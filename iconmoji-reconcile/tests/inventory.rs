use std::fs;

use iconmoji_reconcile::*;

#[test]
fn directory_listing_collects_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1f600.svg"), "<svg/>").unwrap();
    fs::write(dir.path().join("1f601.svg"), "<svg/>").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let inventory = load_inventory(&DirectorySource::new(dir.path()), "svg").unwrap();

    assert_eq!(inventory.len(), 2);
    assert!(inventory.contains("1f600.svg"));
    assert!(!inventory.contains("nested"));
}

#[test]
fn empty_directory_is_uninitialized() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_inventory(&DirectorySource::new(dir.path()), "svg").unwrap_err();
    assert!(matches!(err, InventoryError::Empty(_)));
    assert!(err.is_uninitialized());
}

#[test]
fn missing_directory_is_uninitialized() {
    let dir = tempfile::tempdir().unwrap();
    let source = DirectorySource::new(dir.path().join("vendor").join("svg"));

    let err = load_inventory(&source, "svg").unwrap_err();
    assert!(matches!(err, InventoryError::Missing(_)));
    assert!(err.is_uninitialized());
}

#[test]
fn memory_source_substitutes_for_directory() {
    let inventory = load_inventory(&MemorySource::new(["1f600.svg"]), "svg").unwrap();
    assert_eq!(inventory.files().collect::<Vec<_>>(), vec!["1f600.svg"]);
}

#[test]
fn empty_memory_source_is_rejected() {
    let err = load_inventory(&MemorySource::default(), "svg").unwrap_err();
    assert!(matches!(err, InventoryError::Empty(ref loc) if loc == "<memory>"));
}
