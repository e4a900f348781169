use mybrowser::storage::{BookmarkStore, StoragePaths};
use mybrowser::types::bookmark::Bookmark;
use mybrowser::types::errors::StorageError;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> BookmarkStore {
    let paths = StoragePaths::new(dir.path());
    BookmarkStore::new(&paths)
}

#[test]
fn test_load_without_file_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(store_in(&dir).load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let bookmarks = vec![
        Bookmark::new("https://b.example", "B"),
        Bookmark::new("https://a.example", "A"),
        Bookmark::new("https://b.example", "B again"),
    ];

    store.save(&bookmarks).unwrap();

    assert_eq!(store.load().unwrap(), bookmarks);
}

#[test]
fn test_file_is_pretty_json_array() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .save(&[Bookmark::new("https://example.com", "Example")])
        .unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with('['));
    assert!(text.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"url": "https://example.com", "title": "Example"}])
    );
}

#[test]
fn test_save_overwrites() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.save(&[Bookmark::new("https://old.example", "Old")]).unwrap();
    store.save(&[]).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_add_appends_duplicates() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add("https://example.com", "Example").unwrap();
    let list = store.add("https://example.com", "Example").unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(store.load().unwrap(), list);
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "{not json").unwrap();

    assert!(matches!(store.load(), Err(StorageError::Serialization(_))));
}
