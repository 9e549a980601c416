use coursekit_core::{
    new_item_id, CourseStore, InMemoryCourseStore, Item, ItemKind, ItemPatch, StoreError,
};
use uuid::Uuid;

fn setup() -> InMemoryCourseStore {
    InMemoryCourseStore::new()
}

#[test]
fn create_link_appends_to_partition_tail() {
    let mut store = setup();
    let module = store.create_module("Reading").unwrap();

    let first = new_item_id();
    let second = new_item_id();
    store
        .create_item(Item::link(first, Some(module), "One", "https://one.test"))
        .unwrap();
    store
        .create_item(Item::link(second, Some(module), "Two", "https://two.test"))
        .unwrap();

    let partition = store.partition_items(Some(module));
    assert_eq!(partition.len(), 2);
    assert_eq!(partition[0].id, first);
    assert_eq!(partition[1].id, second);
}

#[test]
fn create_file_keeps_upload_metadata() {
    let mut store = setup();
    let id = new_item_id();
    store
        .create_item(Item::file(
            id,
            None,
            "Syllabus",
            "syllabus.pdf",
            48_213,
            "application/pdf",
        ))
        .unwrap();

    let item = &store.items()[0];
    assert_eq!(item.kind, ItemKind::File);
    assert_eq!(item.file_name.as_deref(), Some("syllabus.pdf"));
    assert_eq!(item.file_size, Some(48_213));
    assert_eq!(item.file_type.as_deref(), Some("application/pdf"));
    assert_eq!(item.url, None);
}

#[test]
fn create_link_rejects_malformed_url() {
    let mut store = setup();

    let err = store
        .create_item(Item::link(new_item_id(), None, "Broken", "not a url"))
        .unwrap_err();
    assert_eq!(err, StoreError::InvalidUrl("not a url".to_string()));
    assert!(store.items().is_empty());
}

#[test]
fn create_item_rejects_blank_title() {
    let mut store = setup();

    let err = store
        .create_item(Item::link(new_item_id(), None, "  ", "https://ok.test"))
        .unwrap_err();
    assert_eq!(err, StoreError::EmptyTitle);
}

#[test]
fn create_item_rejects_duplicate_id() {
    let mut store = setup();
    let id = new_item_id();
    store
        .create_item(Item::link(id, None, "First", "https://first.test"))
        .unwrap();

    let err = store
        .create_item(Item::link(id, None, "Second", "https://second.test"))
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateItemId(id));
    assert_eq!(store.items().len(), 1);
}

#[test]
fn create_item_rejects_unknown_module() {
    let mut store = setup();
    let missing = Uuid::new_v4();

    let err = store
        .create_item(Item::link(
            new_item_id(),
            Some(missing),
            "Orphan",
            "https://orphan.test",
        ))
        .unwrap_err();
    assert_eq!(err, StoreError::ModuleNotFound(missing));
}

#[test]
fn update_item_merges_patch_fields_and_keeps_kind() {
    let mut store = setup();
    let id = new_item_id();
    store
        .create_item(Item::link(id, None, "Old", "https://old.test"))
        .unwrap();

    store
        .update_item(id, &ItemPatch::link("New", "https://new.test"))
        .unwrap();

    let item = &store.items()[0];
    assert_eq!(item.kind, ItemKind::Link);
    assert_eq!(item.title, "New");
    assert_eq!(item.url.as_deref(), Some("https://new.test"));
}

#[test]
fn update_item_rejects_invalid_patch_without_touching_state() {
    let mut store = setup();
    let id = new_item_id();
    store
        .create_item(Item::link(id, None, "Keep", "https://keep.test"))
        .unwrap();

    let err = store
        .update_item(id, &ItemPatch::link("New title", "://broken"))
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidUrl(_)));

    let item = &store.items()[0];
    assert_eq!(item.title, "Keep");
    assert_eq!(item.url.as_deref(), Some("https://keep.test"));
}

#[test]
fn update_unknown_item_returns_not_found() {
    let mut store = setup();
    let missing = Uuid::new_v4();

    let err = store
        .update_item(missing, &ItemPatch::title("Anything"))
        .unwrap_err();
    assert_eq!(err, StoreError::ItemNotFound(missing));
}

#[test]
fn delete_item_is_idempotent() {
    let mut store = setup();
    let id = new_item_id();
    store
        .create_item(Item::link(id, None, "Gone soon", "https://gone.test"))
        .unwrap();

    let removed = store.delete_item(id).expect("first delete should remove");
    assert_eq!(removed.id, id);
    assert!(store.delete_item(id).is_none());
    assert!(store.items().is_empty());
}

#[test]
fn move_item_reparents_to_destination_tail() {
    let mut store = setup();
    let source = store.create_module("Source").unwrap();
    let target = store.create_module("Target").unwrap();

    let moved = new_item_id();
    let resident = new_item_id();
    store
        .create_item(Item::link(moved, Some(source), "Moved", "https://m.test"))
        .unwrap();
    store
        .create_item(Item::link(
            resident,
            Some(target),
            "Resident",
            "https://r.test",
        ))
        .unwrap();

    assert!(store.move_item(moved, Some(target)).unwrap());

    let partition = store.partition_items(Some(target));
    assert_eq!(partition.len(), 2);
    assert_eq!(partition[0].id, resident);
    assert_eq!(partition[1].id, moved);
    assert!(store.partition_items(Some(source)).is_empty());
}

#[test]
fn move_item_is_idempotent() {
    let mut store = setup();
    let target = store.create_module("Target").unwrap();
    let id = new_item_id();
    store
        .create_item(Item::link(id, None, "Wanderer", "https://w.test"))
        .unwrap();

    assert!(store.move_item(id, Some(target)).unwrap());
    let after_first: Vec<_> = store.items().to_vec();

    assert!(!store.move_item(id, Some(target)).unwrap());
    assert_eq!(store.items(), after_first.as_slice());
}

#[test]
fn move_item_detaches_to_standalone() {
    let mut store = setup();
    let module = store.create_module("Owner").unwrap();
    let id = new_item_id();
    store
        .create_item(Item::link(id, Some(module), "Loose", "https://l.test"))
        .unwrap();

    assert!(store.move_item(id, None).unwrap());
    assert_eq!(store.items()[0].module_id, None);
    assert_eq!(store.partition_items(None).len(), 1);
}

#[test]
fn move_item_rejects_unknown_destination_module() {
    let mut store = setup();
    let id = new_item_id();
    store
        .create_item(Item::link(id, None, "Stuck", "https://s.test"))
        .unwrap();
    let missing = Uuid::new_v4();

    let err = store.move_item(id, Some(missing)).unwrap_err();
    assert_eq!(err, StoreError::ModuleNotFound(missing));
    assert_eq!(store.items()[0].module_id, None);
}
