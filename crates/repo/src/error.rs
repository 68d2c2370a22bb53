// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository error taxonomy

use silt_core::EntityError;
use silt_store::StoreError;
use thiserror::Error;

/// Errors from repository operations.
///
/// `MissingId` is raised before any I/O is attempted. Store errors propagate
/// unchanged; the repository performs no retry or backoff, and pending entity
/// queues are preserved on failure so the caller can re-invoke safely.
///
/// There is no partial-failure reporting for batch commits: the atomic write
/// is the only compensating mechanism, and a rejected batch surfaces as a
/// single `Store` error.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity id must not be empty")]
    MissingId,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("entity error: {0}")]
    Entity(#[from] EntityError),
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
