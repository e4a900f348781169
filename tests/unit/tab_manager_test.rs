use mybrowser::managers::tab_manager::{truncate_label, TabManager, TabManagerTrait, ELLIPSIS};
use mybrowser::types::errors::TabError;
use rstest::rstest;

#[test]
fn test_create_tab_returns_unique_ids() {
    let mut mgr = TabManager::default();
    let id1 = mgr.create_tab("https://a.example", "A", true);
    let id2 = mgr.create_tab("https://b.example", "B", false);
    assert_ne!(id1, id2);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_create_tab_sets_active_when_first() {
    let mut mgr = TabManager::default();
    let id = mgr.create_tab("https://example.com", "Example", false);
    // First tab should become active even if active=false
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_tabs_kept_in_creation_order() {
    let mut mgr = TabManager::default();
    let ids: Vec<String> = (0..3)
        .map(|i| mgr.create_tab(&format!("https://{}.example", i), "", false))
        .collect();
    let order: Vec<String> = mgr.get_all_tabs().iter().map(|t| t.id.clone()).collect();
    assert_eq!(order, ids);
    assert_eq!(mgr.index_of(&ids[2]), Some(2));
}

#[test]
fn test_close_active_tab_activates_the_one_sliding_in() {
    let mut mgr = TabManager::default();
    let _id1 = mgr.create_tab("https://1.example", "1", true);
    let id2 = mgr.create_tab("https://2.example", "2", true);
    let id3 = mgr.create_tab("https://3.example", "3", false);

    assert!(mgr.close_tab_at(1).unwrap());

    assert!(mgr.get_tab(&id2).is_none());
    assert_eq!(mgr.get_active_tab().unwrap().id, id3);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_close_last_position_activates_new_last() {
    let mut mgr = TabManager::default();
    let id1 = mgr.create_tab("https://1.example", "1", true);
    let id2 = mgr.create_tab("https://2.example", "2", true);

    assert!(mgr.close_tab_at(1).unwrap());

    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
    assert!(mgr.get_tab(&id2).is_none());
}

#[test]
fn test_close_inactive_tab_keeps_active() {
    let mut mgr = TabManager::default();
    let id1 = mgr.create_tab("https://1.example", "1", true);
    let _id2 = mgr.create_tab("https://2.example", "2", false);

    assert!(mgr.close_tab_at(1).unwrap());
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
}

#[test]
fn test_close_only_tab_is_refused() {
    let mut mgr = TabManager::default();
    let id = mgr.create_tab("https://example.com", "Example", true);

    assert!(!mgr.close_tab_at(0).unwrap());
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_close_out_of_range_is_invalid_index() {
    let mut mgr = TabManager::default();
    mgr.create_tab("https://example.com", "", true);
    assert!(matches!(mgr.close_tab_at(5), Err(TabError::InvalidIndex(5))));
}

#[test]
fn test_switch_tab() {
    let mut mgr = TabManager::default();
    let id1 = mgr.create_tab("https://1.example", "1", true);
    let _id2 = mgr.create_tab("https://2.example", "2", true);

    mgr.switch_tab_at(0).unwrap();
    assert_eq!(mgr.active_index(), Some(0));
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);

    assert!(matches!(mgr.switch_tab_at(7), Err(TabError::InvalidIndex(7))));
}

#[rstest]
#[case("Short", 20, "Short")]
#[case("Exactly twenty chars", 20, "Exactly twenty chars")]
#[case("Twenty-one characters", 20, "Twenty-one character...")]
#[case("abcdef", 3, "abc...")]
#[case("", 20, "")]
fn test_truncate_label(#[case] title: &str, #[case] limit: usize, #[case] expected: &str) {
    assert_eq!(truncate_label(title, limit), expected);
}

#[test]
fn test_title_update_truncates_label() {
    let mut mgr = TabManager::new(10);
    let id = mgr.create_tab("https://example.com", "", true);

    mgr.update_tab_title(&id, "A rather long page title").unwrap();

    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.title, "A rather long page title");
    assert_eq!(tab.label, format!("A rather l{}", ELLIPSIS));
}

#[test]
fn test_empty_title_labels_with_url() {
    let mut mgr = TabManager::new(40);
    let id = mgr.create_tab("https://example.com/", "Old", true);

    mgr.update_tab_title(&id, "").unwrap();
    assert_eq!(mgr.get_tab(&id).unwrap().label, "https://example.com/");

    mgr.update_tab_url(&id, "https://example.org/").unwrap();
    assert_eq!(mgr.get_tab(&id).unwrap().label, "https://example.org/");
}

#[test]
fn test_url_update_keeps_title_label() {
    let mut mgr = TabManager::default();
    let id = mgr.create_tab("https://example.com/", "Example", true);

    mgr.update_tab_url(&id, "https://example.com/next").unwrap();

    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "https://example.com/next");
    assert_eq!(tab.label, "Example");
}

#[test]
fn test_loading_flag() {
    let mut mgr = TabManager::default();
    let id = mgr.create_tab("https://example.com/", "", true);
    mgr.set_loading(&id, true).unwrap();
    assert!(mgr.get_tab(&id).unwrap().loading);
    mgr.set_loading(&id, false).unwrap();
    assert!(!mgr.get_tab(&id).unwrap().loading);
    assert!(mgr.set_loading("gone", true).is_err());
}

#[test]
fn test_discard_ignores_floor_and_restores_active() {
    let mut mgr = TabManager::default();
    let id1 = mgr.create_tab("https://1.example", "1", true);
    let id2 = mgr.create_tab("https://2.example", "2", true);

    mgr.discard(&id2, Some(&id1));
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);

    mgr.discard(&id1, None);
    assert_eq!(mgr.tab_count(), 0);
    assert!(mgr.get_active_tab().is_none());
}
