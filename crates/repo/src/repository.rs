// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-sourced entity repository
//!
//! The read path merges the latest snapshot with its event tail into a
//! materialized entity. The write path stages one item per pending event,
//! plus a snapshot item when the cadence policy fires, and submits them as a
//! single atomic write; pending queues are cleared and notifications
//! delivered only after the store confirms the write.
//!
//! Entities are caller-owned and the repository holds no locks; callers must
//! serialize concurrent commits on the same entity instance themselves.
//! Transient store failures propagate unchanged, with no retry or backoff.

use crate::config::RepositoryConfig;
use crate::error::RepositoryError;
use crate::keys::{self, RecordKind};
use crate::policy::SnapshotPolicy;
use silt_core::{Aggregate, EventRecord};
use silt_store::{StoreAdapter, StoredItem};
use std::marker::PhantomData;

/// Per-commit options
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitOptions {
    /// Write a snapshot regardless of cadence
    pub force_snapshots: bool,
}

impl CommitOptions {
    pub fn force() -> Self {
        Self {
            force_snapshots: true,
        }
    }
}

/// Repository for one entity kind over an ordered key-value store
pub struct Repository<A: Aggregate, S: StoreAdapter> {
    store: S,
    policy: SnapshotPolicy,
    config: RepositoryConfig,
    _entity: PhantomData<fn() -> A>,
}

impl<A: Aggregate, S: StoreAdapter> Repository<A, S> {
    pub fn new(store: S, config: RepositoryConfig) -> Self {
        let policy = SnapshotPolicy::new(config.snapshot_frequency);
        Self {
            store,
            policy,
            config,
            _entity: PhantomData,
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn policy(&self) -> &SnapshotPolicy {
        &self.policy
    }

    /// Materialize an entity from its latest snapshot plus event tail.
    ///
    /// Absent both, the entity is its default initial state. Any store error
    /// aborts the whole call; no partial entity is returned.
    pub async fn get(&self, id: &str) -> Result<A, RepositoryError> {
        if id.is_empty() {
            return Err(RepositoryError::MissingId);
        }

        let pk = keys::partition_key(A::KIND, id);
        let snapshot_prefix = keys::sort_key_prefix(A::KIND, RecordKind::Snapshots);
        let event_prefix = keys::sort_key_prefix(A::KIND, RecordKind::Events);

        // Both queries run concurrently; the call resolves once both do. At
        // most `frequency` events can exist past the latest snapshot, so the
        // tail page size is always sufficient.
        let (snapshot, tail) = tokio::join!(
            self.store.range_query(&pk, &snapshot_prefix, true, 1),
            self.store
                .range_query(&pk, &event_prefix, true, self.policy.tail_limit()),
        );
        let snapshot = snapshot?.into_iter().next();
        let tail = tail?;

        // The snapshot's version is encoded in its sort key; the payload
        // stays opaque to the repository
        let snapshot_version = snapshot
            .as_ref()
            .and_then(|item| keys::version_from_sort_key(&item.sort_key))
            .unwrap_or(0);

        // Tail arrives descending; drop events the snapshot already covers,
        // then flip to ascending replay order
        let mut events: Vec<EventRecord> = Vec::with_capacity(tail.len());
        for item in tail {
            let record: EventRecord = serde_json::from_value(item.payload)?;
            if record.version > snapshot_version {
                events.push(record);
            }
        }
        events.reverse();

        let replayed = events.len();
        let entity = A::rehydrate(snapshot.map(|item| item.payload), &events)?;
        tracing::debug!(
            kind = A::KIND,
            id,
            version = entity.core().version,
            snapshot_version,
            replayed,
            "materialized entity"
        );
        Ok(entity)
    }

    /// Resolve each id independently, preserving input order.
    ///
    /// All-or-nothing: the first failing id aborts the whole call; there is
    /// no partial-success mode.
    pub async fn get_all(&self, ids: &[&str]) -> Result<Vec<A>, RepositoryError> {
        let mut entities = Vec::with_capacity(ids.len());
        for id in ids {
            entities.push(self.get(id).await?);
        }
        Ok(entities)
    }

    /// Persist an entity's pending events, plus a snapshot when due, in one
    /// atomic write.
    ///
    /// On success the pending queues are cleared and queued notifications
    /// delivered in enqueue order. On failure the queues are left untouched,
    /// so re-invoking `commit` stages identical write items.
    pub async fn commit(&self, entity: &mut A, opts: CommitOptions) -> Result<(), RepositoryError> {
        let prior_snapshot_version = entity.core().snapshot_version;
        let staged_events = entity.core().new_events.len();

        let (mut items, snapshot_staged) = match self.stage(entity, opts.force_snapshots) {
            Ok(staged) => staged,
            Err(err) => {
                entity.core_mut().snapshot_version = prior_snapshot_version;
                return Err(err);
            }
        };

        let result = if items.is_empty() {
            // Nothing pending and no snapshot due: no I/O required
            Ok(())
        } else if staged_events == 1 && !snapshot_staged {
            // Exactly one pending event and no snapshot: single-item fast path
            match items.pop() {
                Some(item) => self.store.put(item).await,
                None => Ok(()),
            }
        } else {
            self.store.atomic_multi_put(items).await
        };

        if let Err(err) = result {
            entity.core_mut().snapshot_version = prior_snapshot_version;
            return Err(err.into());
        }

        tracing::debug!(
            kind = A::KIND,
            id = %entity.core().id,
            events = staged_events,
            snapshot = snapshot_staged,
            "committed entity"
        );
        Self::finish(entity);
        Ok(())
    }

    /// Commit a batch of entities in one atomic write spanning all of them.
    ///
    /// Every id is validated before any write is staged. One invalid id or a
    /// store rejection aborts the entire batch; no entity is partially
    /// committed. On success notifications drain in input order.
    pub async fn commit_all(
        &self,
        entities: &mut [A],
        opts: CommitOptions,
    ) -> Result<(), RepositoryError> {
        if entities.iter().any(|e| e.core().id.is_empty()) {
            return Err(RepositoryError::MissingId);
        }

        let prior: Vec<u64> = entities.iter().map(|e| e.core().snapshot_version).collect();

        let mut staged = Vec::new();
        let mut stage_err = None;
        for entity in entities.iter_mut() {
            match self.stage(entity, opts.force_snapshots) {
                Ok((items, _)) => staged.extend(items),
                Err(err) => {
                    stage_err = Some(err);
                    break;
                }
            }
        }

        let staged_count = staged.len();
        let result = match stage_err {
            Some(err) => Err(err),
            None if staged.is_empty() => Ok(()),
            None => self
                .store
                .atomic_multi_put(staged)
                .await
                .map_err(RepositoryError::from),
        };

        if let Err(err) = result {
            for (entity, prev) in entities.iter_mut().zip(prior) {
                entity.core_mut().snapshot_version = prev;
            }
            return Err(err);
        }

        for entity in entities.iter_mut() {
            Self::finish(entity);
        }
        tracing::debug!(
            kind = A::KIND,
            entities = entities.len(),
            items = staged_count,
            "committed batch"
        );
        Ok(())
    }

    /// Build the write items for one entity's commit.
    ///
    /// When a snapshot is due, `snapshot_version` advances to the current
    /// version before the payload is captured, so the snapshot records the
    /// version it was taken at. Callers roll that back if the write fails.
    fn stage(
        &self,
        entity: &mut A,
        force: bool,
    ) -> Result<(Vec<StoredItem>, bool), RepositoryError> {
        if entity.core().id.is_empty() {
            return Err(RepositoryError::MissingId);
        }

        let core = entity.core();
        let mut items = Vec::with_capacity(core.new_events.len() + 1);
        for record in &core.new_events {
            let (pk, sk) = keys::encode(A::KIND, &core.id, RecordKind::Events, record.version);
            items.push(StoredItem::new(pk, sk, serde_json::to_value(record)?));
        }

        let snapshot_due = self.policy.should_snapshot(core, force);
        if snapshot_due {
            entity.core_mut().snapshot_version = entity.core().version;
            let payload = entity.snapshot()?;
            let core = entity.core();
            let (pk, sk) = keys::encode(
                A::KIND,
                &core.id,
                RecordKind::Snapshots,
                core.snapshot_version,
            );
            items.push(StoredItem::new(pk, sk, payload));
        }

        Ok((items, snapshot_due))
    }

    /// Post-commit bookkeeping: clear the pending queues and deliver queued
    /// notifications in enqueue order
    fn finish(entity: &mut A) {
        let emits = std::mem::take(&mut entity.core_mut().events_to_emit);
        entity.core_mut().new_events.clear();
        for emit in emits {
            entity.notify(&emit.name, &emit.args);
        }
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
