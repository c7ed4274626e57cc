//! Tests for the document store.

use super::*;
use crate::models::{Department, Document};

fn titled(title: &str) -> Document {
    let mut doc = Document::blank();
    doc.title = title.to_string();
    doc
}

#[test]
fn test_open_without_snapshot_is_empty() {
    let store = DocumentStore::open(MemoryStorage::new());

    assert!(store.is_empty());
    assert_eq!(store.port().write_count(), 0);
}

#[test]
fn test_malformed_snapshot_is_treated_as_empty() {
    for raw in ["not json", "{\"id\": 1}", "[{\"title\": \"missing id\"}]", ""] {
        let store = DocumentStore::open(MemoryStorage::with_snapshot(raw));
        assert!(store.is_empty(), "snapshot {raw:?} should load as empty");
    }
}

#[test]
fn test_unknown_department_is_treated_as_empty() {
    let mut doc = serde_json::to_value(vec![Document::blank()]).unwrap();
    doc[0]["department"] = serde_json::Value::from("Legal");

    let store = DocumentStore::open(MemoryStorage::with_snapshot(doc.to_string()));

    assert!(store.is_empty());
}

#[test]
fn test_upsert_inserts_and_persists() {
    let mut store = DocumentStore::open(MemoryStorage::new());
    let doc = titled("Opening");

    store.upsert(doc.clone()).expect("Failed to upsert");

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&doc.id), Some(&doc));
    assert_eq!(store.port().write_count(), 1);
}

#[test]
fn test_upsert_replaces_in_place() {
    let mut store = DocumentStore::open(MemoryStorage::new());
    let first = titled("First");
    let second = titled("Second");
    store.upsert(first.clone()).unwrap();
    store.upsert(second.clone()).unwrap();

    let mut changed = first.clone();
    changed.title = "First, revised".to_string();
    changed.department = Department::Finance;
    store.upsert(changed).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].id, first.id);
    assert_eq!(store.all()[0].title, "First, revised");
    assert_eq!(store.all()[1].id, second.id);
}

#[test]
fn test_snapshot_round_trip() {
    let mut store = DocumentStore::open(MemoryStorage::new());
    store.upsert(titled("One")).unwrap();
    store.upsert(titled("Two")).unwrap();

    let reopened = DocumentStore::open(store.port().clone());

    assert_eq!(reopened.all(), store.all());
}

#[test]
fn test_remove_is_idempotent() {
    let mut store = DocumentStore::open(MemoryStorage::new());
    let doc = titled("Doomed");
    store.upsert(doc.clone()).unwrap();

    assert!(store.remove(&doc.id).unwrap());
    assert!(!store.remove(&doc.id).unwrap());
    assert!(store.is_empty());
    assert_eq!(store.port().write_count(), 2);
    assert_eq!(store.port().snapshot(), Some("[]"));
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let mut store = DocumentStore::open(MemoryStorage::new());
    store.port_mut().fail_writes(true);
    let doc = titled("Unsaved to disk");

    let err = store.upsert(doc.clone()).unwrap_err();

    assert!(err.is_persistence());
    assert_eq!(store.get(&doc.id), Some(&doc));
    assert!(store.port().snapshot().is_none());

    store.port_mut().fail_writes(false);
    store.upsert(titled("Recovered")).unwrap();
    let reopened = DocumentStore::open(store.port().clone());
    assert_eq!(reopened.len(), 2);
}

#[test]
fn test_duplicate_ids_in_snapshot_keep_first() {
    let doc = titled("Original");
    let mut dup = doc.clone();
    dup.title = "Duplicate".to_string();
    let raw = serde_json::to_string(&vec![doc.clone(), dup]).unwrap();

    let store = DocumentStore::open(MemoryStorage::with_snapshot(raw));

    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].title, "Original");
}
