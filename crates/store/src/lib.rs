// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! silt-store: ordered key-value store adapter
//!
//! The repository talks to its backing store through the [`StoreAdapter`]
//! trait: a range query over a partition plus single and atomic multi-item
//! writes. No conditional logic lives behind this seam; snapshot timing and
//! version filtering belong to the repository.
//!
//! [`MemoryStore`] is the in-process implementation, also used as the test
//! store (it records calls and can reject writes on demand).

pub mod adapter;
pub mod item;
pub mod memory;

pub use adapter::{StoreAdapter, StoreError};
pub use item::StoredItem;
pub use memory::{MemoryStore, StoreCall};
