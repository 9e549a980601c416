use coursekit_core::reorder::{relocate, reorder_partition};
use coursekit_core::{new_item_id, CourseStore, InMemoryCourseStore, Item, ItemId, MoveRequest};
use coursekit_core::{CourseService, ModuleId};

fn link(module_id: Option<ModuleId>, title: &str) -> Item {
    Item::link(
        new_item_id(),
        module_id,
        title,
        format!("https://example.com/{title}"),
    )
}

fn ids(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id).collect()
}

#[test]
fn relocate_moves_element_forward_and_backward() {
    let seq = vec!['a', 'b', 'c', 'd'];

    assert_eq!(relocate(&seq, 0, 2).unwrap(), vec!['b', 'c', 'a', 'd']);
    assert_eq!(relocate(&seq, 3, 1).unwrap(), vec!['a', 'd', 'b', 'c']);
}

#[test]
fn relocate_is_a_pure_permutation() {
    let seq: Vec<u32> = (0..7).collect();
    for from in 0..seq.len() {
        for to in 0..seq.len() {
            let Some(result) = relocate(&seq, from, to) else {
                assert_eq!(from, to);
                continue;
            };
            assert_eq!(result.len(), seq.len());
            let mut sorted = result.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, seq);
            assert_eq!(result[to], seq[from]);
        }
    }
}

#[test]
fn relocate_rejects_equal_and_out_of_range_indices() {
    let seq = vec![1, 2, 3];

    assert!(relocate(&seq, 1, 1).is_none());
    assert!(relocate(&seq, 3, 0).is_none());
    assert!(relocate(&seq, 0, 3).is_none());
    assert!(relocate::<i32>(&[], 0, 0).is_none());
}

#[test]
fn move_module_relocates_within_store() {
    let mut store = InMemoryCourseStore::new();
    let a = store.create_module("A").unwrap();
    let b = store.create_module("B").unwrap();
    let c = store.create_module("C").unwrap();

    assert!(store.move_module(0, 2));
    let order: Vec<ModuleId> = store.modules().iter().map(|module| module.id).collect();
    assert_eq!(order, vec![b, c, a]);

    // Rejected indices leave the order untouched.
    assert!(!store.move_module(1, 1));
    assert!(!store.move_module(0, 9));
    let unchanged: Vec<ModuleId> = store.modules().iter().map(|module| module.id).collect();
    assert_eq!(unchanged, vec![b, c, a]);
}

#[test]
fn reorder_partition_uses_partition_local_indices() {
    let mut store = InMemoryCourseStore::new();
    let module = store.create_module("Mixed").unwrap();

    let owned_a = link(Some(module), "a");
    let standalone = link(None, "loose");
    let owned_b = link(Some(module), "b");
    let owned_c = link(Some(module), "c");
    for item in [&owned_a, &standalone, &owned_b, &owned_c] {
        store.create_item(item.clone()).unwrap();
    }

    // Partition order is [a, b, c]; move index 2 to index 0.
    assert!(store.move_item_within_module(Some(module), 2, 0));

    let partition = ids(&store.partition_items(Some(module)));
    assert_eq!(partition, vec![owned_c.id, owned_a.id, owned_b.id]);
    // The standalone partition is untouched.
    assert_eq!(ids(&store.partition_items(None)), vec![standalone.id]);
}

#[test]
fn reorder_partition_recombines_with_partition_at_tail() {
    let module_items = vec![link(None, "x"), link(None, "y")];
    let other = link(Some(uuid::Uuid::new_v4()), "other");
    let items = vec![module_items[0].clone(), other.clone(), module_items[1].clone()];

    let updated = reorder_partition(&items, None, 0, 1).unwrap();
    assert_eq!(
        ids(&updated),
        vec![other.id, module_items[1].id, module_items[0].id]
    );
}

#[test]
fn reorder_partition_rejects_invalid_indices() {
    let items = vec![link(None, "only")];

    assert!(reorder_partition(&items, None, 0, 0).is_none());
    assert!(reorder_partition(&items, None, 0, 1).is_none());
    assert!(reorder_partition(&items, None, 5, 0).is_none());
}

#[test]
fn move_requests_dispatch_to_store() {
    let mut service = CourseService::new(InMemoryCourseStore::new());
    let first = service.save_module(None, "First").unwrap();
    let second = service.save_module(None, "Second").unwrap();
    let item = new_item_id();
    service
        .add_link(item, Some(first), "Doc", "https://doc.test")
        .unwrap();

    assert!(service.apply(MoveRequest::ModuleMove { from: 0, to: 1 }));
    let order: Vec<ModuleId> = service
        .store()
        .modules()
        .iter()
        .map(|module| module.id)
        .collect();
    assert_eq!(order, vec![second, first]);

    assert!(service.apply(MoveRequest::ItemReparent {
        item_id: item,
        module_id: Some(second),
    }));
    assert_eq!(service.store().items()[0].module_id, Some(second));

    // Same destination again is a silent no-op.
    assert!(!service.apply(MoveRequest::ItemReparent {
        item_id: item,
        module_id: Some(second),
    }));

    // Single-element partition cannot be reordered.
    assert!(!service.apply(MoveRequest::ItemMove {
        module_id: Some(second),
        from: 0,
        to: 0,
    }));
}
