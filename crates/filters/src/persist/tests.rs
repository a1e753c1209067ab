//! Tests for persisted filter state.

use chrono::NaiveDate;
use sift_core::ObjectType;
use tempfile::TempDir;

use super::*;
use crate::resolver::ReferenceSnapshot;
use crate::schema::{Clause, FilterSet, Polarity, ReferenceItem, ReferenceProvider};

fn sample_filters() -> FilterSet {
    let created = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(13, 30, 0)
        .unwrap();
    let mut filters = FilterSet::new();
    filters.push("title", Polarity::Include, Clause::Text("ransomware".into()));
    filters.push("createdAfter", Polarity::Include, Clause::Date(created));
    filters.push(
        "tags",
        Polarity::Exclude,
        Clause::MultiSelect(vec![ReferenceItem::new().with("name", "noise")]),
    );
    filters
}

fn temp_store() -> (TempDir, FileStore) {
    let dir = TempDir::new().expect("create tempdir");
    let store = FileStore::new(dir.path().join("state"));
    (dir, store)
}

#[test]
fn file_store_round_trips_state() {
    let (_dir, store) = temp_store();
    let mut state = PersistedFilterState::new();
    state.set(ObjectType::Alerts, sample_filters());

    save_filter_state(&store, FILTER_STATE_KEY, &state).unwrap();
    let restored = load_filter_state(&store, FILTER_STATE_KEY).unwrap();

    assert_eq!(restored, state);
    assert!(restored.get(ObjectType::Events).is_none());
}

#[test]
fn missing_key_is_empty_state() {
    let (_dir, store) = temp_store();
    let state = load_filter_state(&store, FILTER_STATE_KEY).unwrap();
    assert!(state.is_empty());
}

#[test]
fn corrupt_blob_is_discarded() {
    let store = MemoryStore::new();
    store.set(FILTER_STATE_KEY, "{\"alerts\": [").unwrap();
    let state = load_filter_state(&store, FILTER_STATE_KEY).unwrap();
    assert!(state.is_empty());
}

#[test]
fn zulu_dates_revive_from_foreign_blobs() {
    let store = MemoryStore::new();
    store
        .set(
            FILTER_STATE_KEY,
            r#"{"events": {"eventTimeAfter": {"included": [{"kind": "Date", "value": "2024-01-01T00:00:00Z"}]}}}"#,
        )
        .unwrap();

    let state = load_filter_state(&store, FILTER_STATE_KEY).unwrap();
    let field = state.get(ObjectType::Events).unwrap().get("eventTimeAfter").unwrap();
    assert_eq!(field.included.len(), 1);
    assert!(field.included[0].as_date().is_some());
    assert!(field.not_included.is_empty());
}

#[test]
fn unreadable_date_drops_only_that_clause() {
    let store = MemoryStore::new();
    store
        .set(
            FILTER_STATE_KEY,
            r#"{"alerts": {"title": {"included": [{"kind": "Text", "value": "keep me"}]}},
                "events": {"eventTimeAfter": {"included": [{"kind": "Date", "value": "yesterday"}]}}}"#,
        )
        .unwrap();

    let state = load_filter_state(&store, FILTER_STATE_KEY).unwrap();
    let title = state.get(ObjectType::Alerts).unwrap().get("title").unwrap();
    assert_eq!(title.included, vec![Clause::Text("keep me".into())]);
    assert!(state.get(ObjectType::Events).is_none());
}

#[test]
fn unknown_kind_leaves_sibling_clauses() {
    let store = MemoryStore::new();
    store
        .set(
            FILTER_STATE_KEY,
            r#"{"alerts": {
                "title": {
                    "included": [{"kind": "Range", "value": [1, 2]}, {"kind": "Text", "value": "a"}],
                    "notIncluded": [{"kind": "Text", "value": "b"}]
                },
                "references": {"included": [{"kind": "Chips", "value": "INC-1"}]}
            }}"#,
        )
        .unwrap();

    let state = load_filter_state(&store, FILTER_STATE_KEY).unwrap();
    let alerts = state.get(ObjectType::Alerts).unwrap();
    assert_eq!(alerts.names().collect::<Vec<_>>(), vec!["title"]);
    let title = alerts.get("title").unwrap();
    assert_eq!(title.included, vec![Clause::Text("a".into())]);
    assert_eq!(title.not_included, vec![Clause::Text("b".into())]);
}

#[test]
fn unknown_object_type_is_ignored() {
    let store = MemoryStore::new();
    store
        .set(
            FILTER_STATE_KEY,
            r#"{"incidents": {"title": {"included": [{"kind": "Text", "value": "x"}]}},
                "events": {"title": {"included": [{"kind": "Text", "value": "y"}]}}}"#,
        )
        .unwrap();

    let state = load_filter_state(&store, FILTER_STATE_KEY).unwrap();
    assert!(state.get(ObjectType::Alerts).is_none());
    let title = state.get(ObjectType::Events).unwrap().get("title").unwrap();
    assert_eq!(title.included, vec![Clause::Text("y".into())]);
}

#[test]
fn saved_field_order_is_kept() {
    let store = MemoryStore::new();
    store
        .set(
            FILTER_STATE_KEY,
            r#"{"alerts": {
                "title": {"included": [{"kind": "Text", "value": "x"}]},
                "references": {"included": [{"kind": "Chips", "value": ["INC-1"]}]}
            }}"#,
        )
        .unwrap();

    let state = load_filter_state(&store, FILTER_STATE_KEY).unwrap();
    let names: Vec<_> = state.get(ObjectType::Alerts).unwrap().names().collect();
    assert_eq!(names, vec!["title", "references"]);
}

#[test]
fn setting_an_empty_set_clears_the_entry() {
    let mut state = PersistedFilterState::new();
    state.set(ObjectType::Alerts, sample_filters());

    let mut emptied = FilterSet::new();
    emptied.field_mut("title");
    state.set(ObjectType::Alerts, emptied);

    assert!(state.is_empty());
}

#[test]
fn remove_deletes_the_file() {
    let (_dir, store) = temp_store();
    store.set(FILTER_STATE_KEY, "{}").unwrap();
    assert!(store.get(FILTER_STATE_KEY).unwrap().is_some());

    store.remove(FILTER_STATE_KEY).unwrap();
    assert!(store.get(FILTER_STATE_KEY).unwrap().is_none());
    store.remove(FILTER_STATE_KEY).unwrap();
}

#[test]
fn file_store_rejects_path_like_keys() {
    let (_dir, store) = temp_store();
    assert!(store.set("../escape", "{}").is_err());
    assert!(store.get("").is_err());
}

#[test]
fn restored_items_refresh_against_current_snapshot() {
    let descriptors = crate::registry::descriptors(ObjectType::Alerts, sift_core::QueueVariant::Internal);
    let mut saved = FilterSet::new();
    saved.push(
        "tags",
        Polarity::Include,
        Clause::MultiSelect(vec![
            ReferenceItem::new().with("name", "phishing").with("color", "red"),
            ReferenceItem::new().with("name", "retired"),
        ]),
    );

    let snapshot = ReferenceSnapshot::new().with(
        ReferenceProvider::Tags,
        vec![ReferenceItem::new().with("name", "phishing").with("color", "blue")],
    );
    let refreshed = crate::refresh_filters(descriptors, &saved, &snapshot);

    let items = refreshed.get("tags").unwrap().included[0].as_items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].lookup("color").as_deref(), Some("blue"));
}
