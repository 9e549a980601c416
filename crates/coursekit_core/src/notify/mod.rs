//! Transient notification log for mutation outcomes.
//!
//! # Responsibility
//! - Record user-facing `(message, severity)` events in emit order.
//! - Support dismissal by id; unknown ids are no-ops.
//!
//! # Invariants
//! - Every emitted record carries a unique id.
//! - The log is process-local and transient; expiry is a presentation
//!   concern and never happens here.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome category for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// One transient user-facing event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique per emit call.
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    /// Epoch milliseconds at emit time.
    pub created_at: i64,
}

/// Ordered, in-memory log of pending notifications.
#[derive(Debug, Default)]
pub struct NotificationSink {
    log: Vec<Notification>,
}

impl NotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record and returns its id.
    pub fn emit(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        let record = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: Utc::now().timestamp_millis(),
        };
        let id = record.id;
        self.log.push(record);
        id
    }

    /// Removes the record with this id, if present.
    pub fn dismiss(&mut self, id: Uuid) {
        self.log.retain(|record| record.id != id);
    }

    /// Pending records in emit order.
    pub fn notifications(&self) -> &[Notification] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
