//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations into use-case level APIs.
//! - Translate mutation outcomes into user-facing notifications.

pub mod course_service;
