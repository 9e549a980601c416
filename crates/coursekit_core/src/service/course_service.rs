//! Course builder use-case facade.
//!
//! # Responsibility
//! - Provide the inbound call surface for presentation layers: save,
//!   delete, update, move, and search operations.
//! - Emit one user-facing notification per mutation outcome.
//!
//! # Invariants
//! - Every call runs to completion before the next; the facade never
//!   holds partial state between calls.
//! - Failed validation leaves the store untouched and is reported as an
//!   error notification, never a panic.
//! - Rejected move indices and permissive deletes stay silent.

use crate::model::item::{Item, ItemId, ItemKind, ItemPatch};
use crate::model::module::{Module, ModuleId};
use crate::notify::{Notification, NotificationSink, Severity};
use crate::search::projector::{project, CourseView};
use crate::store::course_store::{CourseStore, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Synchronous move request dispatched by the drag-and-drop layer.
///
/// Pointer-event plumbing stays outside core; by the time a request
/// reaches the facade it is already resolved to indices or ids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveRequest {
    /// Relocate the module at `from` to position `to`.
    ModuleMove { from: usize, to: usize },
    /// Reorder an item inside one partition by partition-local indices.
    ItemMove {
        module_id: Option<ModuleId>,
        from: usize,
        to: usize,
    },
    /// Reparent an item to another module, or detach it (`None`).
    ItemReparent {
        item_id: ItemId,
        module_id: Option<ModuleId>,
    },
}

/// Facade over one store and one notification sink.
pub struct CourseService<S: CourseStore> {
    store: S,
    sink: NotificationSink,
}

impl<S: CourseStore> CourseService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self {
            store,
            sink: NotificationSink::new(),
        }
    }

    /// Creates a module, or renames it when an id is supplied.
    ///
    /// # Contract
    /// - `id = None` appends a new module at the end of the sequence.
    /// - `id = Some` renames with self-exclusion in the duplicate check.
    /// - Returns the id of the created or renamed module.
    pub fn save_module(&mut self, id: Option<ModuleId>, title: &str) -> StoreResult<ModuleId> {
        let result = match id {
            Some(id) => self.store.rename_module(id, title).map(|()| id),
            None => self.store.create_module(title),
        };
        match &result {
            Ok(_) => {
                let message = if id.is_some() {
                    "Module updated successfully"
                } else {
                    "Module created successfully"
                };
                self.sink.emit(message, Severity::Success);
            }
            Err(err) => {
                let message = match err {
                    StoreError::EmptyTitle => "Module name cannot be empty.".to_string(),
                    StoreError::DuplicateTitle(_) => {
                        "A module with this name already exists".to_string()
                    }
                    other => other.to_string(),
                };
                self.sink.emit(message, Severity::Error);
            }
        }
        result
    }

    /// Deletes a module and its items. Unknown ids are silent no-ops.
    pub fn delete_module(&mut self, id: ModuleId) -> Option<Module> {
        let removed = self.store.delete_module(id)?;
        self.sink.emit(
            format!("Module \"{}\" deleted", removed.title),
            Severity::Success,
        );
        Some(removed)
    }

    /// Adds a link item at the tail of the target partition.
    pub fn add_link(
        &mut self,
        id: ItemId,
        module_id: Option<ModuleId>,
        title: &str,
        url: &str,
    ) -> StoreResult<ItemId> {
        let result = self.store.create_item(Item::link(id, module_id, title, url));
        match &result {
            Ok(_) => {
                self.sink.emit("Link added successfully", Severity::Success);
            }
            Err(err) => {
                let message = item_error_message(ItemKind::Link, err);
                self.sink.emit(message, Severity::Error);
            }
        }
        result
    }

    /// Adds a file item from upload-time metadata.
    ///
    /// File content is never read; MIME/size limit checks belong to the
    /// upload collaborator, not to core.
    pub fn add_file(
        &mut self,
        id: ItemId,
        module_id: Option<ModuleId>,
        title: &str,
        file_name: &str,
        file_size: u64,
        file_type: &str,
    ) -> StoreResult<ItemId> {
        let result = self.store.create_item(Item::file(
            id, module_id, title, file_name, file_size, file_type,
        ));
        match &result {
            Ok(_) => {
                self.sink
                    .emit("File uploaded successfully", Severity::Success);
            }
            Err(err) => {
                let message = item_error_message(ItemKind::File, err);
                self.sink.emit(message, Severity::Error);
            }
        }
        result
    }

    /// Merges patch fields into an existing item. Kind never changes.
    pub fn update_item(&mut self, id: ItemId, patch: &ItemPatch) -> StoreResult<()> {
        let kind = self.store.items().iter().find(|item| item.id == id).map(|item| item.kind);
        let result = self.store.update_item(id, patch);
        match (&result, kind) {
            (Ok(()), Some(kind)) => {
                self.sink.emit(
                    format!("{} updated successfully", kind.label()),
                    Severity::Success,
                );
            }
            (Err(err), kind) => {
                let message = item_error_message(kind.unwrap_or(ItemKind::Link), err);
                self.sink.emit(message, Severity::Error);
            }
            (Ok(()), None) => {}
        }
        result
    }

    /// Deletes an item. Unknown ids are silent no-ops.
    pub fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        let removed = self.store.delete_item(id)?;
        self.sink.emit(
            format!("{} deleted", removed.kind.label()),
            Severity::Success,
        );
        Some(removed)
    }

    /// Applies one move request. Returns whether state changed.
    ///
    /// Within-module reorders stay silent on success; rejected indices
    /// are silent no-ops for every request kind.
    pub fn apply(&mut self, request: MoveRequest) -> bool {
        match request {
            MoveRequest::ModuleMove { from, to } => {
                let moved = self.store.move_module(from, to);
                if moved {
                    self.sink
                        .emit("Module reordered successfully", Severity::Success);
                }
                moved
            }
            MoveRequest::ItemMove {
                module_id,
                from,
                to,
            } => self.store.move_item_within_module(module_id, from, to),
            MoveRequest::ItemReparent { item_id, module_id } => {
                match self.store.move_item(item_id, module_id) {
                    Ok(true) => {
                        self.sink.emit("Item moved successfully", Severity::Success);
                        true
                    }
                    Ok(false) => false,
                    Err(err) => {
                        self.sink.emit(err.to_string(), Severity::Error);
                        false
                    }
                }
            }
        }
    }

    /// Projects the current snapshot through a search query.
    pub fn view(&self, query: &str) -> CourseView {
        project(&self.store.snapshot(), query)
    }

    /// Pending notifications in emit order.
    pub fn notifications(&self) -> &[Notification] {
        self.sink.notifications()
    }

    /// Dismisses one notification by id. Unknown ids are no-ops.
    pub fn dismiss_notification(&mut self, id: Uuid) {
        self.sink.dismiss(id);
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Maps a store error to the user-facing message for an item operation.
fn item_error_message(kind: ItemKind, err: &StoreError) -> String {
    match (kind, err) {
        (ItemKind::Link, StoreError::EmptyTitle) => "Link title cannot be empty.".to_string(),
        (ItemKind::File, StoreError::EmptyTitle) => {
            "Please provide a title and select a file.".to_string()
        }
        (_, StoreError::InvalidUrl(_)) => {
            "Please enter a valid URL (e.g., https://example.com).".to_string()
        }
        (_, other) => other.to_string(),
    }
}
