//! Store layer: ownership of course state and its mutation contract.
//!
//! # Responsibility
//! - Define the use-case oriented mutation API over modules and items.
//! - Keep ordering and referential-integrity rules inside one boundary.
//!
//! # Invariants
//! - Mutations are atomic: validation completes before any state changes.
//! - Readers only ever see fully committed state.

pub mod course_store;
