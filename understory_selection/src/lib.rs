// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection --heading-base-level=0

//! Understory Selection: registry-based selection state for headless UI.
//!
//! ## Overview
//!
//! This crate owns the state behind selectable collections (tabs, chips, list
//! items, expansion panels, steppers, pagination) without rendering anything.
//!
//! - A [`Registry`] keeps [`Ticket`]s (id, value, disabled flag) in registration order.
//! - A [`Selection`] tracks which ticket ids are selected and enforces the
//!   single/multiple and [`Mandatory`] policies.
//! - [`Model`] bindings keep a consumer-owned value in sync with the selection in both directions.
//! - [`Group`] and [`Single`] are multiple- and single-selection facades.
//! - [`ContextScope`] lets nested consumers find the nearest provided selection by name.
//!
//! ## Tickets and ids
//!
//! Ids are either supplied by the caller or drawn from the registry's
//! [`IdAllocator`]. Supplying an id that is already registered is an
//! [`Error::DuplicateId`]. Everything an end user can trigger (selecting an
//! unknown or disabled id, unselecting under a mandatory policy) is a silent
//! no-op instead of an error.
//!
//! ## Mandatory policies
//!
//! - [`Mandatory::Off`]: the selection may become empty.
//! - [`Mandatory::Required`]: unselecting the last selected ticket is rejected.
//! - [`Mandatory::Force`]: the first enabled ticket is selected on registration,
//!   and removing the last selection moves it to the next enabled ticket
//!   (wrapping to the first).
//!
//! ## Batching
//!
//! Mutations apply immediately and record [`Change`]s. [`Selection::commit`]
//! is the flush point: it synchronizes bound models, notifies subscribers once,
//! and returns the batch as [`Changes`].
//!
//! ## Example
//!
//! ```rust
//! use understory_selection::{Mandatory, Model, SelectionOptions, Single, TicketInput};
//!
//! let mut single: Single<String, &str> =
//!     Single::new(SelectionOptions::single(Mandatory::Force)).unwrap();
//! for id in ["a", "b", "c"] {
//!     single.register(TicketInput::with_id(id.to_string(), id)).unwrap();
//! }
//! // Force selects the first ticket as soon as it registers.
//! assert_eq!(single.selected_value(), Some(&"a"));
//!
//! // Bind a consumer-owned model and drive the selection from it.
//! let model = Model::new(Some("b"));
//! single.bind_values(model.clone()).unwrap();
//! let _ = single.commit();
//! assert_eq!(single.selected_id().map(String::as_str), Some("b"));
//!
//! // Selection changes flow back into the model on the next commit.
//! single.toggle(&"c".to_string());
//! let changes = single.commit();
//! assert!(changes.selection_changed());
//! assert_eq!(model.get(), Some("c"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature (on by default)
//! only turns on `std` support in dependencies.

#![no_std]

extern crate alloc;

pub mod changes;
pub mod context;
pub mod error;
pub mod group;
pub mod id;
pub mod model;
pub mod options;
pub mod registry;
pub mod selection;
pub mod single;
pub mod ticket;

pub use changes::{Change, ChangeFlags, Changes};
pub use context::{ContextKey, ContextScope};
pub use error::Error;
pub use group::Group;
pub use id::{IdAllocator, TicketKey};
pub use model::{Model, ModelShape};
pub use options::{Mandatory, SelectionOptions};
pub use registry::Registry;
pub use selection::{BindingId, Selection, SubscriptionId};
pub use single::Single;
pub use ticket::{Ticket, TicketInput};

#[cfg(test)]
impl TicketKey for &'static str {
    fn from_sequence(_seq: u64) -> Self {
        unreachable!("string literal keys are always supplied explicitly")
    }
}
