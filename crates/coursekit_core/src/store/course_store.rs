//! Course store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and move APIs over the module and item
//!   collections.
//! - Enforce title uniqueness, URL well-formedness, and referential
//!   integrity before committing any change.
//!
//! # Invariants
//! - Module titles are unique across modules (case-sensitive, trimmed).
//! - A non-null `module_id` always references an existing module;
//!   deleting a module cascades to its items.
//! - Partition order is the order of appearance in the global item list;
//!   creation and reparenting append at the partition tail.
//! - Deletes are permissive: unknown ids are no-ops, not errors.

use crate::model::item::{Item, ItemId, ItemKind, ItemPatch};
use crate::model::module::{Module, ModuleId};
use crate::reorder::{partition, relocate, reorder_partition};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

pub type StoreResult<T> = Result<T, StoreError>;

/// Validation and lookup errors raised by store mutations.
///
/// Rejected move indices are deliberately absent: out-of-range or
/// equal-index moves are silent no-ops per the move contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Title is blank after trimming.
    EmptyTitle,
    /// Another module already holds this exact title.
    DuplicateTitle(String),
    /// Target module does not exist.
    ModuleNotFound(ModuleId),
    /// Target item does not exist.
    ItemNotFound(ItemId),
    /// Caller-supplied item id is already in use.
    DuplicateItemId(ItemId),
    /// Link URL does not parse as a well-formed URL.
    InvalidUrl(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be blank"),
            Self::DuplicateTitle(title) => {
                write!(f, "module title already exists: `{title}`")
            }
            Self::ModuleNotFound(id) => write!(f, "module not found: {id}"),
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::DuplicateItemId(id) => write!(f, "item id already in use: {id}"),
            Self::InvalidUrl(url) => write!(f, "invalid url: `{url}`"),
        }
    }
}

impl Error for StoreError {}

/// Owned, immutable copy of store state for stateless readers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSnapshot {
    pub modules: Vec<Module>,
    pub items: Vec<Item>,
}

/// Store interface consumed by the service facade and by tests.
///
/// Kept as a trait so presentation layers receive the store by
/// injection rather than reaching for ambient state.
pub trait CourseStore {
    /// Appends a new module and returns its generated id.
    fn create_module(&mut self, title: &str) -> StoreResult<ModuleId>;
    /// Renames an existing module, excluding it from the duplicate check.
    fn rename_module(&mut self, id: ModuleId, title: &str) -> StoreResult<()>;
    /// Removes a module and every item it owns. Unknown ids are no-ops;
    /// the removed module is returned when one existed.
    fn delete_module(&mut self, id: ModuleId) -> Option<Module>;
    /// Appends a caller-built item at the tail of its partition.
    fn create_item(&mut self, item: Item) -> StoreResult<ItemId>;
    /// Merges patch fields into an existing item. Kind never changes.
    fn update_item(&mut self, id: ItemId, patch: &ItemPatch) -> StoreResult<()>;
    /// Removes an item. Unknown ids are no-ops; the removed item is
    /// returned when one existed.
    fn delete_item(&mut self, id: ItemId) -> Option<Item>;
    /// Reparents an item to the tail of the destination partition.
    /// Returns `Ok(false)` when the item is already there.
    fn move_item(&mut self, id: ItemId, module_id: Option<ModuleId>) -> StoreResult<bool>;
    /// Relocates a module by index. Returns `false` on rejected indices.
    fn move_module(&mut self, from: usize, to: usize) -> bool;
    /// Reorders an item inside one partition by partition-local indices.
    /// Returns `false` on rejected indices.
    fn move_item_within_module(
        &mut self,
        module_id: Option<ModuleId>,
        from: usize,
        to: usize,
    ) -> bool;
    /// Current module sequence.
    fn modules(&self) -> &[Module];
    /// Current global item list.
    fn items(&self) -> &[Item];
    /// Owned copy of the full state for stateless projections.
    fn snapshot(&self) -> CourseSnapshot;
}

/// Sole owner of course state; the single source of truth.
#[derive(Debug, Default)]
pub struct InMemoryCourseStore {
    modules: Vec<Module>,
    items: Vec<Item>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn module_index(&self, id: ModuleId) -> Option<usize> {
        self.modules.iter().position(|module| module.id == id)
    }

    fn item_index(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Trims and validates a module title against all modules except
    /// `exclude`, which carries the id being renamed.
    fn validated_module_title(
        &self,
        title: &str,
        exclude: Option<ModuleId>,
    ) -> StoreResult<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let taken = self
            .modules
            .iter()
            .any(|module| Some(module.id) != exclude && module.title == trimmed);
        if taken {
            return Err(StoreError::DuplicateTitle(trimmed.to_string()));
        }
        Ok(trimmed.to_string())
    }

    fn ensure_module_exists(&self, module_id: Option<ModuleId>) -> StoreResult<()> {
        match module_id {
            Some(id) if self.module_index(id).is_none() => Err(StoreError::ModuleNotFound(id)),
            _ => Ok(()),
        }
    }

    /// Items of one partition in their current relative order.
    pub fn partition_items(&self, module_id: Option<ModuleId>) -> Vec<Item> {
        partition(&self.items, module_id)
    }
}

impl CourseStore for InMemoryCourseStore {
    fn create_module(&mut self, title: &str) -> StoreResult<ModuleId> {
        let title = self.validated_module_title(title, None)?;
        let module = Module::new(title);
        let id = module.id;
        self.modules.push(module);
        info!("event=module_created module=store status=ok id={id}");
        Ok(id)
    }

    fn rename_module(&mut self, id: ModuleId, title: &str) -> StoreResult<()> {
        let index = self
            .module_index(id)
            .ok_or(StoreError::ModuleNotFound(id))?;
        let title = self.validated_module_title(title, Some(id))?;
        self.modules[index].title = title;
        info!("event=module_renamed module=store status=ok id={id}");
        Ok(())
    }

    fn delete_module(&mut self, id: ModuleId) -> Option<Module> {
        let index = self.module_index(id)?;
        let removed = self.modules.remove(index);
        let before = self.items.len();
        self.items.retain(|item| item.module_id != Some(id));
        info!(
            "event=module_deleted module=store status=ok id={id} cascaded_items={}",
            before - self.items.len()
        );
        Some(removed)
    }

    fn create_item(&mut self, item: Item) -> StoreResult<ItemId> {
        let mut item = item;
        item.title = item.title.trim().to_string();
        if item.title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        if self.item_index(item.id).is_some() {
            return Err(StoreError::DuplicateItemId(item.id));
        }
        self.ensure_module_exists(item.module_id)?;
        if item.kind == ItemKind::Link {
            let url = item.url.as_deref().unwrap_or("").trim().to_string();
            validate_url(&url)?;
            item.url = Some(url);
        }
        let id = item.id;
        self.items.push(item);
        debug!("event=item_created module=store status=ok id={id}");
        Ok(id)
    }

    fn update_item(&mut self, id: ItemId, patch: &ItemPatch) -> StoreResult<()> {
        let index = self.item_index(id).ok_or(StoreError::ItemNotFound(id))?;

        // Validate the full patch before touching the record.
        let title = match &patch.title {
            Some(title) => {
                let trimmed = title.trim();
                if trimmed.is_empty() {
                    return Err(StoreError::EmptyTitle);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };
        let url = match &patch.url {
            Some(url) => {
                let trimmed = url.trim().to_string();
                validate_url(&trimmed)?;
                Some(trimmed)
            }
            None => None,
        };

        let item = &mut self.items[index];
        if let Some(title) = title {
            item.title = title;
        }
        if let Some(url) = url {
            item.url = Some(url);
        }
        if let Some(file_name) = &patch.file_name {
            item.file_name = Some(file_name.clone());
        }
        if let Some(file_size) = patch.file_size {
            item.file_size = Some(file_size);
        }
        if let Some(file_type) = &patch.file_type {
            item.file_type = Some(file_type.clone());
        }
        debug!("event=item_updated module=store status=ok id={id}");
        Ok(())
    }

    fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.item_index(id)?;
        let removed = self.items.remove(index);
        debug!("event=item_deleted module=store status=ok id={id}");
        Some(removed)
    }

    fn move_item(&mut self, id: ItemId, module_id: Option<ModuleId>) -> StoreResult<bool> {
        let index = self.item_index(id).ok_or(StoreError::ItemNotFound(id))?;
        self.ensure_module_exists(module_id)?;
        if self.items[index].module_id == module_id {
            return Ok(false);
        }
        // Re-append so the item lands at the destination partition tail.
        let mut item = self.items.remove(index);
        item.module_id = module_id;
        self.items.push(item);
        debug!("event=item_reparented module=store status=ok id={id}");
        Ok(true)
    }

    fn move_module(&mut self, from: usize, to: usize) -> bool {
        match relocate(&self.modules, from, to) {
            Some(updated) => {
                self.modules = updated;
                debug!("event=module_reordered module=store status=ok from={from} to={to}");
                true
            }
            None => false,
        }
    }

    fn move_item_within_module(
        &mut self,
        module_id: Option<ModuleId>,
        from: usize,
        to: usize,
    ) -> bool {
        match reorder_partition(&self.items, module_id, from, to) {
            Some(updated) => {
                self.items = updated;
                debug!("event=item_reordered module=store status=ok from={from} to={to}");
                true
            }
            None => false,
        }
    }

    fn modules(&self) -> &[Module] {
        &self.modules
    }

    fn items(&self) -> &[Item] {
        &self.items
    }

    fn snapshot(&self) -> CourseSnapshot {
        CourseSnapshot {
            modules: self.modules.clone(),
            items: self.items.clone(),
        }
    }
}

fn validate_url(url: &str) -> StoreResult<()> {
    if url.is_empty() {
        return Err(StoreError::InvalidUrl(url.to_string()));
    }
    Url::parse(url).map_err(|_| StoreError::InvalidUrl(url.to_string()))?;
    Ok(())
}
