//! Core domain logic for the CourseKit authoring tool.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod notify;
pub mod reorder;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{new_item_id, Item, ItemId, ItemKind, ItemPatch};
pub use model::module::{Module, ModuleId};
pub use notify::{Notification, NotificationSink, Severity};
pub use search::projector::{filtered_items, project, visible_modules, CourseView, ModuleView};
pub use service::course_service::{CourseService, MoveRequest};
pub use store::course_store::{
    CourseSnapshot, CourseStore, InMemoryCourseStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
