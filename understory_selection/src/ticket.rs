// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tickets: the per-item state record held by a [`Registry`](crate::Registry).

/// One registered, selectable item.
///
/// A ticket's order is implicit: it is its position in the owning registry,
/// which is the registration sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket<K, V> {
    pub(crate) id: K,
    pub(crate) value: V,
    pub(crate) disabled: bool,
}

impl<K, V> Ticket<K, V> {
    /// The ticket's unique identifier.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// The payload bound to this ticket.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Whether the ticket is excluded from selection.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Consume the ticket and return its payload.
    pub fn into_value(self) -> V {
        self.value
    }
}

/// Registration input for a ticket.
#[derive(Clone, Debug)]
pub struct TicketInput<K, V> {
    /// Explicit id; allocated when `None`.
    pub id: Option<K>,
    /// Payload for the ticket.
    pub value: V,
    /// Initial disabled state.
    pub disabled: bool,
}

impl<K, V> TicketInput<K, V> {
    /// Input with an allocated id and an enabled ticket.
    pub fn new(value: V) -> Self {
        Self {
            id: None,
            value,
            disabled: false,
        }
    }

    /// Input with an explicit id.
    pub fn with_id(id: K, value: V) -> Self {
        Self {
            id: Some(id),
            value,
            disabled: false,
        }
    }

    /// Set the initial disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
