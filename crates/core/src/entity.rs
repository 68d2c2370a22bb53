// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-sourced entity contract
//!
//! `EntityCore` is the state block every event-sourced entity embeds: identity,
//! version counters, and the pending event/notification queues. `Aggregate` is
//! the seam the repository works through; it never inspects concrete entity
//! state beyond this trait.

use crate::event::{Emit, EventRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from entity serialization and replay
#[derive(Debug, Error)]
pub enum EntityError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("replay failed at version {version}: {reason}")]
    Replay { version: u64, reason: String },
}

/// Event-sourcing state embedded in every entity.
///
/// The pending queues are never serialized: a snapshot captures durable state
/// only, and queues are cleared by the repository once a commit is confirmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityCore {
    /// Entity identity, non-empty once assigned, immutable afterwards
    pub id: String,
    /// Starts at 0, +1 per applied event, monotonic for the entity's lifetime
    pub version: u64,
    /// Version at which the last snapshot was captured, 0 initially
    pub snapshot_version: u64,
    /// Ordered events recorded since the last successful commit
    #[serde(skip)]
    pub new_events: Vec<EventRecord>,
    /// Ordered notifications queued for delivery after the next commit
    #[serde(skip)]
    pub events_to_emit: Vec<Emit>,
}

impl EntityCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event for a domain operation: bumps `version` by one and
    /// appends the record to the pending queue.
    pub fn digest(&mut self, method: &str, params: Vec<serde_json::Value>) {
        self.version += 1;
        self.new_events
            .push(EventRecord::new(method, params, self.version));
    }

    /// Queue a notification for post-commit delivery
    pub fn enqueue(&mut self, name: &str, args: Vec<serde_json::Value>) {
        self.events_to_emit.push(Emit::new(name, args));
    }

    /// True if a commit would have nothing to persist
    pub fn is_clean(&self) -> bool {
        self.new_events.is_empty()
    }
}

/// An event-sourced domain entity.
///
/// Concrete entities embed an [`EntityCore`], record one event per domain
/// operation via [`EntityCore::digest`], and implement replay/snapshot so the
/// repository can rehydrate them from storage.
pub trait Aggregate: Default + Send {
    /// Storage kind tag; lower-cased into partition and sort keys
    const KIND: &'static str;

    fn core(&self) -> &EntityCore;
    fn core_mut(&mut self) -> &mut EntityCore;

    /// Apply a previously persisted event during replay.
    ///
    /// Must mutate state exactly as the original domain operation did, without
    /// recording a new event. Version bookkeeping is handled by `rehydrate`.
    fn replay_event(&mut self, record: &EventRecord) -> Result<(), EntityError>;

    /// Serialize full state at the current version
    fn snapshot(&self) -> Result<serde_json::Value, EntityError>;

    /// Restore full state from a snapshot payload
    fn restore(payload: serde_json::Value) -> Result<Self, EntityError>;

    /// Notification entry point, invoked post-commit in enqueue order
    fn notify(&mut self, name: &str, args: &[serde_json::Value]) {
        let _ = (name, args);
    }

    /// Rehydrate from an optional snapshot plus the ascending event tail.
    ///
    /// Applies the snapshot first, then replays events in ascending version
    /// order. Absent both, the entity is its default initial state. Replayed
    /// events are already durable, so the pending queues end up empty.
    fn rehydrate(
        snapshot: Option<serde_json::Value>,
        events: &[EventRecord],
    ) -> Result<Self, EntityError> {
        let mut entity = match snapshot {
            Some(payload) => Self::restore(payload)?,
            None => Self::default(),
        };

        for record in events {
            entity.replay_event(record)?;
            entity.core_mut().version = record.version;
        }

        let core = entity.core_mut();
        core.new_events.clear();
        core.events_to_emit.clear();

        Ok(entity)
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
