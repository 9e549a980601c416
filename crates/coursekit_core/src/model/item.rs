//! Item domain record.
//!
//! # Responsibility
//! - Define the link/file resource record attached to a module (or none).
//! - Provide constructors for the two item kinds and the update patch.
//!
//! # Invariants
//! - `id` is caller-supplied, stable, and never reused for another item.
//! - `kind` is fixed at creation; `ItemPatch` cannot change it.
//! - File metadata is captured once at upload time and never re-validated.

use crate::model::module::ModuleId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a course item.
pub type ItemId = Uuid;

/// Resource category for an item, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// External URL resource.
    Link,
    /// Uploaded file, represented by its metadata only.
    File,
}

impl ItemKind {
    /// User-facing label used in notification messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::File => "File",
        }
    }
}

/// A link or file resource, optionally owned by a module.
///
/// Kind-specific fields are optional so one record shape covers both
/// kinds; constructors keep the populated set consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id supplied by the caller at creation.
    pub id: ItemId,
    /// Owning module. `None` means standalone.
    #[serde(rename = "moduleId")]
    pub module_id: Option<ModuleId>,
    /// Serialized as `type` to match the external schema naming.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// User-facing name. No uniqueness constraint.
    pub title: String,
    /// Target URL. Meaningful only when `kind == ItemKind::Link`.
    pub url: Option<String>,
    /// Original file name. Meaningful only when `kind == ItemKind::File`.
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    /// File size in bytes, from upload-time metadata.
    #[serde(rename = "fileSize")]
    pub file_size: Option<u64>,
    /// MIME-like type string, from upload-time metadata.
    #[serde(rename = "fileType")]
    pub file_type: Option<String>,
}

impl Item {
    /// Builds a link item. URL well-formedness is checked by the store.
    pub fn link(
        id: ItemId,
        module_id: Option<ModuleId>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            module_id,
            kind: ItemKind::Link,
            title: title.into(),
            url: Some(url.into()),
            file_name: None,
            file_size: None,
            file_type: None,
        }
    }

    /// Builds a file item from upload-time metadata.
    pub fn file(
        id: ItemId,
        module_id: Option<ModuleId>,
        title: impl Into<String>,
        file_name: impl Into<String>,
        file_size: u64,
        file_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            module_id,
            kind: ItemKind::File,
            title: title.into(),
            url: None,
            file_name: Some(file_name.into()),
            file_size: Some(file_size),
            file_type: Some(file_type.into()),
        }
    }

    /// Returns whether this item belongs to the given partition.
    pub fn in_partition(&self, module_id: Option<ModuleId>) -> bool {
        self.module_id == module_id
    }
}

/// Field-wise update for an existing item.
///
/// `None` leaves the current value untouched. There is deliberately no
/// way to express a kind change: `kind` is immutable after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub file_type: Option<String>,
}

impl ItemPatch {
    /// Patch that only replaces the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Patch that replaces title and url, the edit-link modal shape.
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// Generates a fresh caller-side item id.
///
/// The store treats item ids as opaque caller input; this helper exists
/// so presentation layers do not need to depend on `uuid` directly.
pub fn new_item_id() -> ItemId {
    Uuid::new_v4()
}
