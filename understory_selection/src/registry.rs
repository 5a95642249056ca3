// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered ticket registry.
//!
//! ## Ordering
//!
//! Tickets iterate in registration order. Removing a ticket shifts the later
//! ones down without reordering them, so relative order is stable for the
//! lifetime of the registry.
//!
//! ## Identity
//!
//! Ids come from the registry's [`IdAllocator`]. An explicit id that is
//! already live is rejected with [`Error::DuplicateId`].

use alloc::vec::Vec;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::error::Error;
use crate::id::{IdAllocator, TicketKey};
use crate::ticket::{Ticket, TicketInput};

/// Ordered map from id to [`Ticket`].
pub struct Registry<K, V> {
    tickets: IndexMap<K, Ticket<K, V>, FxBuildHasher>,
    ids: IdAllocator,
}

impl<K: TicketKey, V> core::fmt::Debug for Registry<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let disabled = self.tickets.values().filter(|t| t.disabled).count();
        f.debug_struct("Registry")
            .field("ids", &self.tickets.keys().collect::<Vec<_>>())
            .field("disabled", &disabled)
            .finish_non_exhaustive()
    }
}

impl<K: TicketKey, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TicketKey, V> Registry<K, V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tickets: IndexMap::with_hasher(FxBuildHasher),
            ids: IdAllocator::new(),
        }
    }

    /// Register a ticket at the end of the iteration order and return its id.
    pub fn register(&mut self, input: TicketInput<K, V>) -> Result<K, Error> {
        let tickets = &self.tickets;
        let id = self.ids.allocate(input.id, |k| tickets.contains_key(k))?;
        trace!(id = ?id, disabled = input.disabled, "register ticket");
        self.tickets.insert(
            id.clone(),
            Ticket {
                id: id.clone(),
                value: input.value,
                disabled: input.disabled,
            },
        );
        Ok(id)
    }

    /// Remove a ticket, returning it if it was registered.
    pub fn unregister(&mut self, id: &K) -> Option<Ticket<K, V>> {
        let ticket = self.tickets.shift_remove(id)?;
        trace!(id = ?id, "unregister ticket");
        Some(ticket)
    }

    /// Remove every ticket.
    pub fn clear(&mut self) {
        self.tickets.clear();
    }

    /// Look up a ticket by id.
    pub fn get(&self, id: &K) -> Option<&Ticket<K, V>> {
        self.tickets.get(id)
    }

    /// Ticket at registration position `index`.
    pub fn get_index(&self, index: usize) -> Option<&Ticket<K, V>> {
        self.tickets.get_index(index).map(|(_, t)| t)
    }

    /// Registration position of `id`.
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.tickets.get_index_of(id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &K) -> bool {
        self.tickets.contains_key(id)
    }

    /// Whether `id` is registered and enabled.
    pub fn is_enabled(&self, id: &K) -> bool {
        self.tickets.get(id).is_some_and(|t| !t.disabled)
    }

    /// Number of registered tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// True if no tickets are registered.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Tickets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Ticket<K, V>> + '_ {
        self.tickets.values()
    }

    /// Ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.tickets.keys()
    }

    /// Ids of enabled tickets in registration order.
    pub fn enabled_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.tickets.values().filter(|t| !t.disabled).map(|t| &t.id)
    }

    /// First ticket, in registration order, satisfying `pred`.
    pub fn find(&self, mut pred: impl FnMut(&Ticket<K, V>) -> bool) -> Option<&Ticket<K, V>> {
        self.tickets.values().find(|t| pred(t))
    }

    /// First enabled ticket strictly after position `after`, or from the start when `None`.
    ///
    /// Does not wrap.
    pub fn next_enabled(&self, after: Option<usize>) -> Option<&Ticket<K, V>> {
        let start = after.map_or(0, |i| i + 1);
        self.tickets
            .values()
            .skip(start)
            .find(|t| !t.disabled)
    }

    /// Last enabled ticket strictly before position `before`, or from the end when `None`.
    ///
    /// Does not wrap.
    pub fn prev_enabled(&self, before: Option<usize>) -> Option<&Ticket<K, V>> {
        let end = before.unwrap_or(self.tickets.len()).min(self.tickets.len());
        self.tickets.values().take(end).rev().find(|t| !t.disabled)
    }

    /// Set the disabled flag. Returns `true` if the flag changed.
    pub fn set_disabled(&mut self, id: &K, disabled: bool) -> bool {
        match self.tickets.get_mut(id) {
            Some(t) if t.disabled != disabled => {
                t.disabled = disabled;
                true
            }
            _ => false,
        }
    }

    /// Replace the ticket's payload, returning the previous one.
    pub fn set_value(&mut self, id: &K, value: V) -> Option<V> {
        self.tickets
            .get_mut(id)
            .map(|t| core::mem::replace(&mut t.value, value))
    }
}
