// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadcrumb trail with a visible-depth limit.
//!
//! The trail is an ordered stack of tickets; there is no selection. When the
//! trail is deeper than the visible limit, [`Breadcrumbs::items`] keeps the
//! root and the most recent `visible - 1` crumbs and puts a single
//! [`Crumb::Ellipsis`] between them.

use alloc::vec::Vec;

use tracing::debug;
use understory_selection::{Error, Registry, Ticket, TicketInput, TicketKey};

/// One rendered position in the trail.
#[derive(Debug, PartialEq, Eq)]
pub enum Crumb<'a, K, V> {
    /// A crumb from the trail.
    Item(&'a Ticket<K, V>),
    /// Placeholder for the collapsed middle of the trail.
    Ellipsis,
}

impl<K, V> Clone for Crumb<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Crumb<'_, K, V> {}

/// Ordered trail of crumbs from the root to the current location.
pub struct Breadcrumbs<K, V> {
    trail: Registry<K, V>,
    visible: usize,
}

impl<K: TicketKey, V> core::fmt::Debug for Breadcrumbs<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Breadcrumbs")
            .field("trail", &self.trail)
            .field("visible", &self.visible)
            .finish()
    }
}

impl<K: TicketKey, V> Breadcrumbs<K, V> {
    /// Create an empty trail showing at most `visible` positions before collapsing.
    pub fn new(visible: usize) -> Result<Self, Error> {
        if visible == 0 {
            return Err(Error::InvalidOptions("breadcrumbs need at least one visible crumb"));
        }
        Ok(Self {
            trail: Registry::new(),
            visible,
        })
    }

    /// The visible-depth limit.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Append a crumb and return its id.
    pub fn push(&mut self, input: TicketInput<K, V>) -> Result<K, Error> {
        self.trail.register(input)
    }

    /// Remove and return the current crumb.
    pub fn pop(&mut self) -> Option<Ticket<K, V>> {
        let last = self.trail.get_index(self.trail.len().checked_sub(1)?)?.id().clone();
        self.trail.unregister(&last)
    }

    /// Make `id` the current crumb by dropping everything after it.
    ///
    /// Returns `false` and leaves the trail alone if `id` is not on it.
    pub fn navigate_to(&mut self, id: &K) -> bool {
        let Some(at) = self.trail.index_of(id) else {
            return false;
        };
        let dropped = self.trail.len() - at - 1;
        if dropped > 0 {
            debug!(to = ?id, dropped, "navigate back along trail");
        }
        while self.trail.len() > at + 1 {
            self.pop();
        }
        true
    }

    /// The first crumb.
    pub fn root(&self) -> Option<&Ticket<K, V>> {
        self.trail.get_index(0)
    }

    /// The last crumb.
    pub fn current(&self) -> Option<&Ticket<K, V>> {
        self.trail.len().checked_sub(1).and_then(|i| self.trail.get_index(i))
    }

    /// Number of crumbs on the trail.
    pub fn depth(&self) -> usize {
        self.trail.len()
    }

    /// Whether the trail is deeper than the visible limit.
    pub fn is_collapsed(&self) -> bool {
        self.trail.len() > self.visible
    }

    /// Every crumb from root to current.
    pub fn iter(&self) -> impl Iterator<Item = &Ticket<K, V>> + '_ {
        self.trail.iter()
    }

    /// Positions to display, collapsing the middle when needed.
    pub fn items(&self) -> Vec<Crumb<'_, K, V>> {
        if !self.is_collapsed() {
            return self.trail.iter().map(Crumb::Item).collect();
        }
        let tail = self.visible - 1;
        let mut items = Vec::with_capacity(self.visible + 1);
        items.extend(self.root().map(Crumb::Item));
        items.push(Crumb::Ellipsis);
        items.extend(self.trail.iter().skip(self.trail.len() - tail).map(Crumb::Item));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(visible: usize, names: &[&'static str]) -> (Breadcrumbs<u32, &'static str>, Vec<u32>) {
        let mut b = Breadcrumbs::new(visible).unwrap();
        let ids = names
            .iter()
            .map(|name| b.push(TicketInput::new(*name)).unwrap())
            .collect();
        (b, ids)
    }

    fn labels(b: &Breadcrumbs<u32, &'static str>) -> Vec<&'static str> {
        b.items()
            .into_iter()
            .map(|c| match c {
                Crumb::Item(t) => *t.value(),
                Crumb::Ellipsis => "...",
            })
            .collect()
    }

    #[test]
    fn shallow_trails_show_everything() {
        let (b, _) = trail(4, &["home", "docs", "api"]);
        assert!(!b.is_collapsed());
        assert_eq!(labels(&b), ["home", "docs", "api"]);
        assert_eq!(b.root().map(|t| *t.value()), Some("home"));
        assert_eq!(b.current().map(|t| *t.value()), Some("api"));
    }

    #[test]
    fn deep_trails_collapse_the_middle() {
        let (b, _) = trail(3, &["home", "docs", "guides", "selection", "models"]);
        assert!(b.is_collapsed());
        assert_eq!(b.depth(), 5);
        assert_eq!(labels(&b), ["home", "...", "selection", "models"]);

        let (b, _) = trail(1, &["home", "docs"]);
        assert_eq!(labels(&b), ["home", "..."]);
    }

    #[test]
    fn navigate_to_truncates_after_target() {
        let (mut b, ids) = trail(3, &["home", "docs", "guides", "selection"]);
        assert!(b.navigate_to(&ids[1]));
        assert_eq!(labels(&b), ["home", "docs"]);
        assert!(!b.navigate_to(&ids[3]));
        assert_eq!(b.depth(), 2);
    }

    #[test]
    fn pop_removes_current() {
        let (mut b, _) = trail(3, &["home", "docs"]);
        assert_eq!(b.pop().map(|t| *t.value()), Some("docs"));
        assert_eq!(b.pop().map(|t| *t.value()), Some("home"));
        assert!(b.pop().is_none());
        assert!(b.current().is_none());
        assert!(b.items().is_empty());
    }

    #[test]
    fn zero_visible_is_rejected() {
        assert!(matches!(
            Breadcrumbs::<u32, ()>::new(0),
            Err(Error::InvalidOptions(_))
        ));
    }
}
