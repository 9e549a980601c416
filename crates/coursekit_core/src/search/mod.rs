//! Search projection entry points.
//!
//! # Responsibility
//! - Compute the visible subset of modules and items for a free-text
//!   query, from scratch on every call.
//! - Keep result shaping inside core so presentation stays dumb.

pub mod projector;
