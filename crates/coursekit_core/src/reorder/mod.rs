//! Pure reorder computations for drag-and-drop move requests.
//!
//! # Responsibility
//! - Compute new orderings for module and item sequences without touching
//!   store state.
//!
//! # Invariants
//! - Every function is a pure permutation: no element is added, removed,
//!   or duplicated.
//! - Equal or out-of-range indices yield `None`, never a panic or a
//!   partial result.
//! - `reorder_partition` recombines as non-partition items followed by
//!   the reordered partition; only per-partition order is contractual.

use crate::model::item::Item;
use crate::model::module::ModuleId;

/// Removes the element at `from` and reinserts it at `to`.
///
/// Returns `None` when `from == to` or either index is out of range, so
/// callers can treat rejected requests as guaranteed no-ops.
pub fn relocate<T: Clone>(seq: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from == to || from >= seq.len() || to >= seq.len() {
        return None;
    }
    let mut updated = seq.to_vec();
    let moved = updated.remove(from);
    updated.insert(to, moved);
    Some(updated)
}

/// Reorders one item within its `module_id` partition.
///
/// Indices are positions inside the partition, not the global list. The
/// result keeps every non-partition item first (original relative order)
/// and appends the reordered partition at the tail. Cross-partition
/// interleaving is therefore not preserved; see DESIGN.md.
pub fn reorder_partition(
    items: &[Item],
    module_id: Option<ModuleId>,
    from: usize,
    to: usize,
) -> Option<Vec<Item>> {
    let partition: Vec<Item> = items
        .iter()
        .filter(|item| item.in_partition(module_id))
        .cloned()
        .collect();
    let reordered = relocate(&partition, from, to)?;

    let mut updated: Vec<Item> = items
        .iter()
        .filter(|item| !item.in_partition(module_id))
        .cloned()
        .collect();
    updated.extend(reordered);
    Some(updated)
}

/// Returns the items of one partition in their current relative order.
pub fn partition(items: &[Item], module_id: Option<ModuleId>) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.in_partition(module_id))
        .cloned()
        .collect()
}
