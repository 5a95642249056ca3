// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_navigation --heading-base-level=0

//! Understory Navigation: navigation and disclosure state built on `understory_selection`.
//!
//! ## Overview
//!
//! Each type here composes a selection or registry from
//! [`understory_selection`] with one navigation policy:
//!
//! - [`Pagination`]: a forced single selection over pages `1..=length`, with
//!   clamped selection and a windowed list of page buttons ([`PageItem`]).
//! - [`ExpansionPanel`]: accordion ([`ExpansionMode::Accordion`]) or
//!   independent ([`ExpansionMode::Multiple`]) expansion.
//! - [`Stepper`]: linear first/last/next/prev over steps, skipping disabled
//!   steps and never wrapping.
//! - [`Breadcrumbs`]: an ordered trail that collapses its middle into a
//!   [`Crumb::Ellipsis`] once it is deeper than its visible limit.
//!
//! Rendering and accessibility wiring are left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use understory_navigation::{PageItem, Pagination, PaginationOptions};
//!
//! let mut pages = Pagination::new(PaginationOptions::with_length(10)).unwrap();
//! pages.select(5);
//! assert_eq!(
//!     pages.items(),
//!     [
//!         PageItem::Page(1),
//!         PageItem::Ellipsis,
//!         PageItem::Page(4),
//!         PageItem::Page(5),
//!         PageItem::Page(6),
//!         PageItem::Ellipsis,
//!         PageItem::Page(10),
//!     ]
//! );
//! pages.select(42);
//! assert!(pages.is_last());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod breadcrumbs;
pub mod expansion;
pub mod pagination;
pub mod stepper;

pub use breadcrumbs::{Breadcrumbs, Crumb};
pub use expansion::{ExpansionMode, ExpansionPanel};
pub use pagination::{PageItem, Pagination, PaginationOptions};
pub use stepper::Stepper;

#[cfg(test)]
mod tests {
    use understory_selection::{ContextKey, ContextScope, Mandatory, TicketInput};

    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    const PANELS: ContextKey<RefCell<ExpansionPanel<u32, &'static str>>> =
        ContextKey::new("v0:expansion-panel");

    #[test]
    fn nested_panels_find_their_provider() {
        let root = ContextScope::root();
        let provider = root.child();
        let panels = provider.provide(
            &PANELS,
            RefCell::new(ExpansionPanel::new(ExpansionMode::Accordion, Mandatory::Off).unwrap()),
        );

        // Each panel registers itself through the nearest provider.
        let ids: Vec<u32> = ["one", "two"]
            .into_iter()
            .map(|title| {
                let found = provider.child().require(&PANELS).unwrap();
                let mut set = found.borrow_mut();
                set.register(TicketInput::new(title)).unwrap()
            })
            .collect();

        panels.borrow_mut().expand(&ids[1]);
        assert!(panels.borrow().is_expanded(&ids[1]));
        assert!(root.inject(&PANELS).is_none());
    }
}
