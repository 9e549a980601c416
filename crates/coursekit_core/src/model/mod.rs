//! Domain model for course modules and their items.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep construction helpers next to the records they build.
//!
//! # Invariants
//! - Every domain object is identified by a stable `Uuid`-based id.
//! - Ordering is positional: neither record stores a sort key.

pub mod item;
pub mod module;
