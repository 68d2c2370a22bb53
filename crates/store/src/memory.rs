// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory ordered store
//!
//! Backs tests and in-process use. Items live in a `BTreeMap` keyed by
//! `(partition_key, sort_key)`, which gives range queries their ordering for
//! free. Calls are recorded, and writes can be made to fail for atomicity
//! tests.

use crate::adapter::{StoreAdapter, StoreError};
use crate::item::StoredItem;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Recorded store call
#[derive(Debug, Clone)]
pub enum StoreCall {
    RangeQuery {
        partition_key: String,
        sort_key_prefix: String,
        descending: bool,
        limit: usize,
    },
    AtomicMultiPut {
        count: usize,
    },
    Put {
        partition_key: String,
        sort_key: String,
    },
}

/// In-memory ordered key-value store
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<BTreeMap<(String, String), serde_json::Value>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
    reject_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Make subsequent writes fail with `StoreError::Rejected`
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Number of items currently stored
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a single item by exact key
    pub fn get(&self, partition_key: &str, sort_key: &str) -> Option<serde_json::Value> {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&(partition_key.to_string(), sort_key.to_string()))
            .cloned()
    }

    fn record(&self, call: StoreCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("write rejection injected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl StoreAdapter for MemoryStore {
    async fn range_query(
        &self,
        partition_key: &str,
        sort_key_prefix: &str,
        descending: bool,
        limit: usize,
    ) -> Result<Vec<StoredItem>, StoreError> {
        self.record(StoreCall::RangeQuery {
            partition_key: partition_key.to_string(),
            sort_key_prefix: sort_key_prefix.to_string(),
            descending,
            limit,
        });

        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());

        // BTreeMap iteration is ascending by (partition, sort) key
        let mut matched: Vec<StoredItem> = items
            .iter()
            .filter(|((pk, sk), _)| pk == partition_key && sk.starts_with(sort_key_prefix))
            .map(|((pk, sk), payload)| StoredItem::new(pk.clone(), sk.clone(), payload.clone()))
            .collect();

        if descending {
            matched.reverse();
        }
        matched.truncate(limit);

        Ok(matched)
    }

    async fn atomic_multi_put(&self, items: Vec<StoredItem>) -> Result<(), StoreError> {
        self.record(StoreCall::AtomicMultiPut { count: items.len() });
        self.check_writable()?;

        // One lock held across all inserts makes the batch all-or-nothing
        let mut map = self.items.lock().unwrap_or_else(|e| e.into_inner());
        for item in items {
            map.insert((item.partition_key, item.sort_key), item.payload);
        }

        Ok(())
    }

    async fn put(&self, item: StoredItem) -> Result<(), StoreError> {
        self.record(StoreCall::Put {
            partition_key: item.partition_key.clone(),
            sort_key: item.sort_key.clone(),
        });
        self.check_writable()?;

        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert((item.partition_key, item.sort_key), item.payload);

        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
