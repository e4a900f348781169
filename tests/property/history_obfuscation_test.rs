//! Property-based tests for history obfuscation and the history file.

use mybrowser::services::history_obfuscator::{decode, encode};
use mybrowser::storage::{HistoryStore, StoragePaths};
use proptest::prelude::*;
use tempfile::TempDir;

/// Strings rich in the characters that obfuscate to line breaks or escapes.
fn arb_tricky_entry() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('_'),
            Just('X'),
            Just('\\'),
            Just('\n'),
            Just('\t'),
            any::<char>(),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn encode_twice_is_identity(text in any::<String>()) {
        prop_assert_eq!(encode(&encode(&text)), text.clone());
        prop_assert_eq!(decode(&encode(&text)), text);
    }

    #[test]
    fn encode_preserves_char_count(text in any::<String>()) {
        prop_assert_eq!(encode(&text).chars().count(), text.chars().count());
    }

    #[test]
    fn history_file_roundtrip(history in prop::collection::vec(arb_tricky_entry(), 0..12)) {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(&StoragePaths::new(dir.path()));

        store.save(&history).unwrap();

        prop_assert_eq!(store.load().unwrap(), history);
    }
}
