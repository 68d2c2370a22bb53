// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! silt-repo: event-sourced entity repository
//!
//! This crate provides:
//! - Key encoding that maps `(entity kind, id, record kind, version)` onto an
//!   ordered store's partition/sort keys
//! - The snapshot cadence policy that bounds replay cost
//! - The `Repository` itself: `get`/`get_all` rehydrate entities by merging
//!   the latest snapshot with its event tail; `commit`/`commit_all` persist
//!   pending events (and a snapshot when due) in one atomic write, then
//!   deliver queued notifications

pub mod config;
pub mod error;
pub mod keys;
pub mod policy;
pub mod repository;

// Re-exports
pub use config::{ConfigError, RepositoryConfig};
pub use error::RepositoryError;
pub use keys::RecordKind;
pub use policy::SnapshotPolicy;
pub use repository::{CommitOptions, Repository};
