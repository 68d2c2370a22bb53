// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage key encoding
//!
//! Every persisted record is addressed by a partition key (grouping one
//! entity's items) and a sort key (record kind + zero-padded version).
//! Zero-padding to a fixed width makes lexicographic sort-key order equal
//! numeric version order, which is what range queries rely on.

use std::fmt;

/// Width of the zero-padded version component; covers versions below 10^15
pub const VERSION_PAD: usize = 15;

/// The two record kinds a partition holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Events,
    Snapshots,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Events => "events",
            RecordKind::Snapshots => "snapshots",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partition key for one entity: `{kind}#{id}`, kind lower-cased
pub fn partition_key(kind: &str, id: &str) -> String {
    format!("{}#{}", kind.to_lowercase(), id)
}

/// Sort-key prefix shared by all records of one kind in a partition
pub fn sort_key_prefix(kind: &str, record: RecordKind) -> String {
    format!("{}{}#", kind.to_lowercase(), record)
}

/// Full sort key: `{kind}{record}#{version}` with the version zero-padded
pub fn sort_key(kind: &str, record: RecordKind, version: u64) -> String {
    format!("{}{}#{:0pad$}", kind.to_lowercase(), record, version, pad = VERSION_PAD)
}

/// Encode a record's full storage key
pub fn encode(kind: &str, id: &str, record: RecordKind, version: u64) -> (String, String) {
    (partition_key(kind, id), sort_key(kind, record, version))
}

/// Recover the numeric version from a sort key.
///
/// The read path uses this to learn the latest snapshot's version without
/// inspecting the opaque snapshot payload.
pub fn version_from_sort_key(sort_key: &str) -> Option<u64> {
    let (_, padded) = sort_key.rsplit_once('#')?;
    padded.parse().ok()
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
