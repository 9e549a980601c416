//! Case-insensitive substring projection over a course snapshot.
//!
//! # Responsibility
//! - Decide module and item visibility for a free-text query.
//! - Bundle the visible state into one view record per call.
//!
//! # Invariants
//! - An empty query is the identity projection: every module and item is
//!   visible, order untouched.
//! - Projection never mutates the snapshot; it reads and returns copies.
//! - Visibility is recomputed from scratch per call, no index is kept.

use crate::model::item::Item;
use crate::model::module::{Module, ModuleId};
use crate::store::course_store::CourseSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One visible module with its visible items, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleView {
    pub module: Module,
    pub items: Vec<Item>,
}

/// Full visible state for one query.
///
/// `standalone` holds the unowned partition; the presentation layer
/// surfaces it as a separate results block while a query is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseView {
    pub query: String,
    pub modules: Vec<ModuleView>,
    pub standalone: Vec<Item>,
}

/// Returns whether one item matches the lowercased query.
///
/// Matching fields are `title`, `url`, and `file_name`; absent optional
/// fields never match.
fn item_matches(item: &Item, needle: &str) -> bool {
    if item.title.to_lowercase().contains(needle) {
        return true;
    }
    [item.url.as_deref(), item.file_name.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Computes the visible module subset for a query.
///
/// A module is visible when its title matches, or when it owns at least
/// one matching item. Title matches are collected first in module order,
/// then item-derived matches in item order, deduplicated first-seen-wins
/// by module id.
pub fn visible_modules(modules: &[Module], items: &[Item], query: &str) -> Vec<Module> {
    if query.is_empty() {
        return modules.to_vec();
    }
    let needle = query.to_lowercase();
    let mut seen: HashSet<ModuleId> = HashSet::new();
    let mut visible = Vec::new();

    for module in modules {
        if module.title.to_lowercase().contains(&needle) && seen.insert(module.id) {
            visible.push(module.clone());
        }
    }
    for item in items.iter().filter(|item| item_matches(item, &needle)) {
        let Some(owner_id) = item.module_id else {
            continue;
        };
        if let Some(module) = modules.iter().find(|module| module.id == owner_id) {
            if seen.insert(module.id) {
                visible.push(module.clone());
            }
        }
    }
    visible
}

/// Computes the visible item subset of one partition for a query.
///
/// With an empty query the whole partition passes through unfiltered.
pub fn filtered_items(items: &[Item], module_id: Option<ModuleId>, query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.in_partition(module_id))
        .filter(|item| query.is_empty() || item_matches(item, &needle))
        .cloned()
        .collect()
}

/// Projects a snapshot into the visible view for a query.
///
/// `project(snapshot, "")` reproduces the unfiltered state exactly.
pub fn project(snapshot: &CourseSnapshot, query: &str) -> CourseView {
    let modules = visible_modules(&snapshot.modules, &snapshot.items, query)
        .into_iter()
        .map(|module| {
            let items = filtered_items(&snapshot.items, Some(module.id), query);
            ModuleView { module, items }
        })
        .collect();
    CourseView {
        query: query.to_string(),
        modules,
        standalone: filtered_items(&snapshot.items, None, query),
    }
}
