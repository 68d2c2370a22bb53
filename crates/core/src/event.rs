// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event and notification records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded state mutation, immutable once persisted.
///
/// `version` is unique and strictly increasing per entity; it is the only
/// field the repository layer inspects besides `method` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Name of the domain operation that produced this event
    pub method: String,
    /// Arguments the operation was invoked with
    pub params: Vec<serde_json::Value>,
    /// When the event was recorded
    pub timestamp: DateTime<Utc>,
    /// Entity version after applying this event
    pub version: u64,
}

impl EventRecord {
    /// Record an event at the given version with the current wall clock
    pub fn new(method: &str, params: Vec<serde_json::Value>, version: u64) -> Self {
        Self {
            method: method.to_string(),
            params,
            timestamp: Utc::now(),
            version,
        }
    }
}

/// A pending notification descriptor, delivered after a successful commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emit {
    /// Notification name
    pub name: String,
    /// Arguments passed to the entity's notification entry point
    pub args: Vec<serde_json::Value>,
}

impl Emit {
    pub fn new(name: &str, args: Vec<serde_json::Value>) -> Self {
        Self {
            name: name.to_string(),
            args,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
