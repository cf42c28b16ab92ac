// Scenario tests for the lorebook store
//
// Walk the store through the same sequences the frontend produces:
// - library lifecycle with the active pointer
// - entry CRUD with backend-minted UIDs
// - imports with dict-shaped keyword arrays

use serde_json::json;

use loremaster::models::entry::{EntryPayload, normalize_string_list};
use loremaster::services::library::LorebookStore;

fn payload(value: serde_json::Value) -> EntryPayload {
    serde_json::from_value(value).unwrap()
}

#[test]
fn scenario_create_then_delete_last_book() {
    // 从一本预置传说书开始（活跃指针指向它）
    let mut store = LorebookStore::seeded();
    let l0 = store.active().unwrap().to_string();

    // 创建第二本：活跃指针已设置，不变
    let l1 = store.create_lorebook("B", vec![]).id;
    assert_eq!(store.active(), Some(l0.as_str()));

    // 删除活跃的那本：指针落到剩下的书上
    store.delete_lorebook(&l0).unwrap();
    assert_eq!(store.active(), Some(l1.as_str()));

    // 删除最后一本：指针清空，图书馆为空
    store.delete_lorebook(&l1).unwrap();
    assert_eq!(store.active(), None);
    assert!(store.list_library().is_empty());
}

#[test]
fn scenario_add_then_delete_entry() {
    let mut store = LorebookStore::seeded();
    let book_id = store.active().unwrap().to_string();
    let count_before = store.get_lorebook(&book_id).unwrap().entry_count;

    let added = store
        .add_entry(&book_id, payload(json!({"comment": "x"})))
        .unwrap();
    let uid = added.entry.unwrap().uid;
    assert!(uid > 0);
    assert_eq!(added.lorebook.entry_count, count_before + 1);

    let deleted = store.delete_entry(&book_id, uid).unwrap();
    assert!(deleted.entry.is_none());
    assert_eq!(deleted.lorebook.entry_count, count_before);

    // 第二次删除同一 UID：NotFound
    assert!(store.delete_entry(&book_id, uid).is_err());
}

#[test]
fn scenario_import_with_dict_shaped_keys() {
    let mut store = LorebookStore::new();
    let book = store.create_lorebook(
        "Imported",
        vec![payload(json!({"key": {"0": "dragon", "1": "cave"}}))],
    );

    let stored = store.get_lorebook(&book.id).unwrap();
    assert_eq!(stored.entries[0].key, vec!["dragon", "cave"]);
}

#[test]
fn scenario_uid_stable_under_replacement() {
    let mut store = LorebookStore::new();
    let book = store.create_lorebook("L", vec![payload(json!({"uid": 7, "comment": "a"}))]);

    // 载荷换了 UID 也不影响存储的 UID
    store
        .update_entry(&book.id, 7, payload(json!({"uid": 99, "comment": "b"})))
        .unwrap();
    let stored = store.get_lorebook(&book.id).unwrap();
    assert_eq!(stored.entries[0].uid, 7);
    assert_eq!(stored.entries[0].comment, "b");

    // 载荷不带 UID 同样保持
    store
        .update_entry(&book.id, 7, payload(json!({"comment": "c"})))
        .unwrap();
    let stored = store.get_lorebook(&book.id).unwrap();
    assert_eq!(stored.entries[0].uid, 7);
}

#[test]
fn scenario_listing_is_idempotent_and_counts_hold() {
    let mut store = LorebookStore::seeded();
    let book_id = store.active().unwrap().to_string();

    store
        .add_entry(&book_id, payload(json!({"uid": 1})))
        .unwrap();
    store
        .add_entry(&book_id, payload(json!({"uid": 2})))
        .unwrap();

    let first = serde_json::to_value(store.list_library()).unwrap();
    let second = serde_json::to_value(store.list_library()).unwrap();
    assert_eq!(first, second);

    for meta in store.list_library() {
        let book = store.get_lorebook(&meta.id).unwrap();
        assert_eq!(meta.entry_count, book.entries.len());
        assert_eq!(book.entry_count, book.entries.len());
    }
}

#[test]
fn normalizer_totality_examples() {
    assert_eq!(
        normalize_string_list(Some(&json!({"a": "x", "b": "y"}))),
        vec!["x", "y"]
    );
    assert_eq!(normalize_string_list(Some(&json!("solo"))), vec!["solo"]);
    assert!(normalize_string_list(None).is_empty());
}
