//! Module domain record.
//!
//! # Responsibility
//! - Define the named container that owns an ordered run of items.
//!
//! # Invariants
//! - `id` is stable and never reused for another module.
//! - `title` is stored trimmed; uniqueness across modules is enforced by
//!   the store, not here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a course module.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ModuleId = Uuid;

/// A named, ordered container for course items.
///
/// Position within the course is implicit (index in the store's module
/// sequence), so the record itself carries no order field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Stable id assigned by the store at creation.
    pub id: ModuleId,
    /// User-facing name, unique across all modules (case-sensitive).
    pub title: String,
}

impl Module {
    /// Creates a module with a generated stable id.
    ///
    /// The title is stored as given; trimming and uniqueness checks are
    /// the store's responsibility before construction.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }
}
