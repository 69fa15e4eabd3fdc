// Edge-case tests for the transcript store
// Run with: cargo test --lib store::tests

use crate::store::TranscriptStore;
use crate::transcribe::VideoRecord;
use tempfile::TempDir;

fn setup_store() -> (TranscriptStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = TranscriptStore::new(temp_dir.path().join("test.db"));
    (store, temp_dir)
}

fn sample_record(id: &str, created_at: &str) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        url: format!("https://www.youtube.com/watch?v={id}"),
        title: "Sample Video".to_string(),
        channel: "Sample Channel".to_string(),
        author: "Sample Author".to_string(),
        upload_date: "20240501".to_string(),
        duration: 300,
        description: "Sample description".to_string(),
        transcription: "This is a sample transcription.".to_string(),
        created_at: created_at.to_string(),
    }
}

#[test]
fn test_init_is_idempotent() {
    let (store, _temp) = setup_store();
    store.init().unwrap();
    store.init().unwrap();
}

#[test]
fn test_save_then_get_round_trips_every_field() {
    let (store, _temp) = setup_store();
    let record = sample_record("sample123", "2024-05-01T12:00:00Z");
    store.save(&record).unwrap();

    let fetched = store.get("sample123").unwrap().unwrap();
    assert_eq!(fetched, record);
}

#[test]
fn test_save_twice_overwrites_in_place() {
    let (store, _temp) = setup_store();
    store
        .save(&sample_record("sample123", "2024-05-01T12:00:00Z"))
        .unwrap();

    let mut updated = sample_record("sample123", "2024-06-01T12:00:00Z");
    updated.title = "Updated Title".to_string();
    updated.transcription = "Updated transcription.".to_string();
    store.save(&updated).unwrap();

    let fetched = store.get("sample123").unwrap().unwrap();
    assert_eq!(fetched.title, "Updated Title");
    assert_eq!(fetched.transcription, "Updated transcription.");
    assert_eq!(fetched.created_at, "2024-06-01T12:00:00Z");

    // Still a single row for the ID
    let records = store.list_recent(100).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_upsert_is_idempotent_under_identical_input() {
    let (store, _temp) = setup_store();
    let record = sample_record("sample123", "2024-05-01T12:00:00Z");
    store.save(&record).unwrap();
    store.save(&record).unwrap();

    let records = store.list_recent(100).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(store.get("sample123").unwrap().unwrap(), record);
}

#[test]
fn test_get_unknown_id_returns_none() {
    let (store, _temp) = setup_store();
    store.init().unwrap();
    assert!(store.get("missing").unwrap().is_none());
}

#[test]
fn test_get_without_store_file_returns_none() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("never_created.db");
    let store = TranscriptStore::new(&db_path);

    assert!(store.get("anything").unwrap().is_none());
    // The lookup must not create the file as a side effect
    assert!(!db_path.exists());
}

#[test]
fn test_list_without_store_file_returns_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = TranscriptStore::new(temp_dir.path().join("never_created.db"));
    assert!(store.list_recent(10).unwrap().is_empty());
}

#[test]
fn test_list_orders_by_created_at_descending() {
    let (store, _temp) = setup_store();
    store.save(&sample_record("aaa", "2024-05-01T12:00:00Z")).unwrap();
    store.save(&sample_record("ccc", "2024-05-03T12:00:00Z")).unwrap();
    store.save(&sample_record("bbb", "2024-05-02T12:00:00Z")).unwrap();

    let records = store.list_recent(10).unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["ccc", "bbb", "aaa"]);
}

#[test]
fn test_list_never_exceeds_limit() {
    let (store, _temp) = setup_store();
    for i in 0..5 {
        store
            .save(&sample_record(
                &format!("video{i}"),
                &format!("2024-05-0{}T12:00:00Z", i + 1),
            ))
            .unwrap();
    }

    assert_eq!(store.list_recent(3).unwrap().len(), 3);
    assert_eq!(store.list_recent(10).unwrap().len(), 5);
}

#[test]
fn test_list_with_non_positive_limit_is_empty() {
    let (store, _temp) = setup_store();
    store.save(&sample_record("aaa", "2024-05-01T12:00:00Z")).unwrap();

    assert!(store.list_recent(0).unwrap().is_empty());
    assert!(store.list_recent(-5).unwrap().is_empty());
}

#[test]
fn test_round_trip_unicode_transcription() {
    let (store, _temp) = setup_store();
    let mut record = sample_record("unicode1", "2024-05-01T12:00:00Z");
    record.transcription = "Señor 日本語 🎉 multi-line\ntranscript".to_string();
    store.save(&record).unwrap();

    let fetched = store.get("unicode1").unwrap().unwrap();
    assert_eq!(fetched.transcription, record.transcription);
}
