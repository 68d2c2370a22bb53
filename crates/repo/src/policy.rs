// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot cadence policy
//!
//! A snapshot is due once an entity has accumulated `frequency` events since
//! its last snapshot, or when a commit forces one. The same frequency bounds
//! the read path: at most `frequency` events can exist past the latest
//! snapshot, so fetching that many trailing events is always sufficient.

use silt_core::EntityCore;

/// Default events-per-snapshot cadence
pub const DEFAULT_SNAPSHOT_FREQUENCY: u64 = 10;

/// Decides when a commit must include a snapshot write
#[derive(Debug, Clone, Copy)]
pub struct SnapshotPolicy {
    frequency: u64,
}

impl SnapshotPolicy {
    /// Create a policy with the given cadence; `frequency` must be positive
    /// (config validation enforces this before construction)
    pub fn new(frequency: u64) -> Self {
        Self { frequency }
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Read-path event-tail page size
    pub fn tail_limit(&self) -> usize {
        self.frequency as usize
    }

    /// True iff this commit must write a snapshot
    pub fn should_snapshot(&self, core: &EntityCore, force: bool) -> bool {
        force || core.version >= core.snapshot_version + self.frequency
    }
}

impl Default for SnapshotPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_FREQUENCY)
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
