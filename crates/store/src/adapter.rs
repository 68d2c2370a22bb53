// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store adapter trait

use crate::item::StoredItem;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from store operations.
///
/// Both variants propagate unchanged to the repository caller; retry and
/// backoff are the caller's concern.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Adapter for an ordered key-value store.
///
/// Items in a partition are ordered by lexicographic sort key. Cancellation
/// and timeouts are delegated to the concrete client's own configuration.
#[async_trait]
pub trait StoreAdapter: Clone + Send + Sync + 'static {
    /// Query a partition for items whose sort key starts with `sort_key_prefix`,
    /// ordered by sort key, returning at most `limit` items.
    async fn range_query(
        &self,
        partition_key: &str,
        sort_key_prefix: &str,
        descending: bool,
        limit: usize,
    ) -> Result<Vec<StoredItem>, StoreError>;

    /// Write all items or none of them
    async fn atomic_multi_put(&self, items: Vec<StoredItem>) -> Result<(), StoreError>;

    /// Single-item fast path, same durability guarantee as a one-item
    /// `atomic_multi_put`
    async fn put(&self, item: StoredItem) -> Result<(), StoreError>;
}
