use mybrowser::storage::{OfflinePageIndex, StoragePaths};
use tempfile::TempDir;

fn index_in(dir: &TempDir) -> (StoragePaths, OfflinePageIndex) {
    let paths = StoragePaths::new(dir.path());
    paths.ensure().unwrap();
    let index = OfflinePageIndex::new(&paths);
    (paths, index)
}

#[test]
fn test_add_appends_one_json_line() {
    let dir = TempDir::new().unwrap();
    let (paths, index) = index_in(&dir);

    let record = index.add("https://example.com", "Example").unwrap();

    let text = std::fs::read_to_string(paths.offline_metadata_file()).unwrap();
    assert_eq!(text.lines().count(), 1);
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(value["url"], "https://example.com");
    assert_eq!(value["title"], "Example");
    assert_eq!(value["saved_at"], serde_json::json!(record.saved_at));
}

#[test]
fn test_same_url_saved_n_times_gives_n_records() {
    let dir = TempDir::new().unwrap();
    let (_paths, index) = index_in(&dir);

    for _ in 0..4 {
        index.add("https://example.com", "Example").unwrap();
    }

    let records = index.records().unwrap();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.url == "https://example.com"));
    assert!(records.windows(2).all(|w| w[0].saved_at <= w[1].saved_at));
}

#[test]
fn test_records_without_log_is_empty() {
    let dir = TempDir::new().unwrap();
    let (_paths, index) = index_in(&dir);
    assert!(index.records().unwrap().is_empty());
}

#[test]
fn test_saved_at_is_rfc3339() {
    let dir = TempDir::new().unwrap();
    let (paths, index) = index_in(&dir);
    index.add("https://example.com", "").unwrap();

    let text = std::fs::read_to_string(paths.offline_metadata_file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    let stamp = value["saved_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
}

#[test]
fn test_snapshot_written_under_offline_dir() {
    let dir = TempDir::new().unwrap();
    let (paths, index) = index_in(&dir);

    let path = index
        .write_snapshot("https://example.com", "<html></html>")
        .unwrap();

    assert_eq!(path, index.snapshot_path("https://example.com"));
    assert_eq!(path.parent().unwrap(), paths.offline_dir());
    assert_eq!(path.extension().unwrap(), "html");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    assert_ne!(
        index.snapshot_path("https://example.com"),
        index.snapshot_path("https://example.org")
    );
}
