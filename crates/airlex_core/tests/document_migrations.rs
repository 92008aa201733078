use airlex_core::store::backend::DATA_FILE_NAME;
use airlex_core::store::migrate::migrate_document;
use airlex_core::{
    JsonFileBackend, MemoryBackend, NewRegulation, StorageBackend, StoreError, UserDocument,
    UserStore, SCHEMA_VERSION,
};
use serde_json::json;

#[test]
fn missing_collections_become_empty_mappings() {
    let document = migrate_document(json!({ "version": 1 })).unwrap();
    assert!(document.regulations.is_empty());
    assert!(document.links.is_empty());
    assert!(document.notes.is_empty());
    assert!(document.themes.is_empty());
}

#[test]
fn absent_version_is_stamped_with_current() {
    let document = migrate_document(json!({ "regulations": {} })).unwrap();
    assert_eq!(document.version, SCHEMA_VERSION);
}

#[test]
fn null_collections_are_treated_as_missing() {
    let document = migrate_document(json!({
        "version": 1,
        "themes": null,
        "notes": null,
    }))
    .unwrap();
    assert!(document.themes.is_empty());
    assert!(document.notes.is_empty());
}

#[test]
fn newer_schema_version_is_rejected() {
    let err = migrate_document(json!({ "version": 999 })).unwrap_err();
    match err {
        StoreError::UnsupportedSchemaVersion {
            document_version,
            latest_supported,
        } => {
            assert_eq!(document_version, 999);
            assert_eq!(latest_supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_object_document_is_rejected() {
    let err = migrate_document(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn migration_preserves_existing_records() {
    let document = migrate_document(json!({
        "regulations": {
            "reg_1": {
                "id": "reg_1",
                "category": "OM Vol.1",
                "referenceNumber": "5.7.10",
                "title": "携帯品",
                "createdAt": "2026-01-10T09:00:00Z",
                "updatedAt": "2026-01-12T09:00:00Z",
            }
        }
    }))
    .unwrap();

    let regulation = document.regulations.get("reg_1").unwrap();
    assert_eq!(regulation.reference_number, "5.7.10");
    // `description` was absent in the persisted record.
    assert!(regulation.description.is_empty());
}

#[test]
fn missing_file_loads_as_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let backend = JsonFileBackend::new(dir.path());
    let document = backend.load().unwrap();
    assert_eq!(document, UserDocument::empty());
}

#[test]
fn corrupt_file_falls_back_to_empty_document_on_open() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DATA_FILE_NAME), "{not json").unwrap();

    let store = UserStore::open(Box::new(JsonFileBackend::new(dir.path()))).unwrap();
    assert_eq!(*store.document(), UserDocument::empty());
}

#[test]
fn newer_schema_on_disk_refuses_to_open() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(DATA_FILE_NAME),
        serde_json::to_string(&json!({ "version": 999 })).unwrap(),
    )
    .unwrap();

    let err = UserStore::open(Box::new(JsonFileBackend::new(dir.path()))).unwrap_err();
    assert!(matches!(err, StoreError::UnsupportedSchemaVersion { .. }));
}

#[test]
fn mutations_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = UserStore::open(Box::new(JsonFileBackend::new(dir.path()))).unwrap();
    let id = store.add_regulation(NewRegulation {
        category: "OM Vol.1".to_string(),
        reference_number: "5.7.10".to_string(),
        title: "携帯品".to_string(),
        description: String::new(),
    });
    drop(store);

    let reopened = UserStore::open(Box::new(JsonFileBackend::new(dir.path()))).unwrap();
    assert!(reopened.document().regulations.contains_key(&id));
}

#[test]
fn memory_backend_records_last_save() {
    let mut backend = MemoryBackend::new();
    let mut document = UserDocument::empty();
    document.version = SCHEMA_VERSION;
    backend.save(&document).unwrap();
    assert_eq!(backend.saved(), Some(&document));
}
