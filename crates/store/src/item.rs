// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stored item encoding

use serde::{Deserialize, Serialize};

/// One key-value item as the backing store sees it.
///
/// Both event and snapshot records use this encoding; the payload is opaque
/// to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    /// Groups all of one entity's items
    pub partition_key: String,
    /// Orders items within a partition and encodes record kind + version
    pub sort_key: String,
    /// Serialized event or snapshot record
    pub payload: serde_json::Value,
}

impl StoredItem {
    pub fn new(partition_key: String, sort_key: String, payload: serde_json::Value) -> Self {
        Self {
            partition_key,
            sort_key,
            payload,
        }
    }
}
