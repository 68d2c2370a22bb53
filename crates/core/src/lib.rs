// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! silt-core: entity contract for the silt event-sourcing workspace
//!
//! This crate provides:
//! - `EventRecord` / `Emit` - the versioned event and pending-notification records
//! - `EntityCore` - the mutable event-sourcing state block embedded in every entity
//! - `Aggregate` - the trait repositories use to rehydrate, snapshot, and notify
//!   entities without reaching into their internals

pub mod entity;
pub mod event;

// Re-exports
pub use entity::{Aggregate, EntityCore, EntityError};
pub use event::{Emit, EventRecord};
