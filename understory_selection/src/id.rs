// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ticket identifiers and the allocator that hands them out.
//!
//! ## Semantics
//!
//! - A caller-supplied hint is used verbatim when no live ticket holds it.
//! - A hint that collides with a live ticket is an [`Error::DuplicateId`].
//! - Without a hint, the allocator draws from a monotonically increasing
//!   sequence and skips any value that a caller registered explicitly.
//!
//! The sequence never rewinds, so an allocated id is not handed out twice
//! during the allocator's lifetime even after its ticket is unregistered.

use alloc::format;
use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

use crate::error::Error;

/// Key type usable as a ticket identifier.
///
/// Implemented for the unsigned integer types and [`String`]. Implement it for
/// your own key type to let the allocator produce fresh ids.
pub trait TicketKey: Clone + Eq + Hash + Debug + 'static {
    /// Build the key for the `seq`-th allocation.
    fn from_sequence(seq: u64) -> Self;
}

impl TicketKey for u32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "u32 keys wrap after 2^32 allocations; the allocator skips live ids."
    )]
    fn from_sequence(seq: u64) -> Self {
        seq as Self
    }
}

impl TicketKey for u64 {
    fn from_sequence(seq: u64) -> Self {
        seq
    }
}

impl TicketKey for usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "usize keys wrap on 32-bit targets; the allocator skips live ids."
    )]
    fn from_sequence(seq: u64) -> Self {
        seq as Self
    }
}

impl TicketKey for String {
    fn from_sequence(seq: u64) -> Self {
        format!("ticket-{seq}")
    }
}

/// Monotonic identity allocator.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator starting at sequence zero.
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Resolve `hint` or allocate a fresh key.
    ///
    /// `is_taken` reports whether a key is currently held by a live ticket.
    pub fn allocate<K: TicketKey>(
        &mut self,
        hint: Option<K>,
        is_taken: impl Fn(&K) -> bool,
    ) -> Result<K, Error> {
        if let Some(id) = hint {
            if is_taken(&id) {
                return Err(Error::DuplicateId(format!("{id:?}")));
            }
            return Ok(id);
        }
        loop {
            let candidate = K::from_sequence(self.next);
            self.next = self.next.wrapping_add(1);
            if !is_taken(&candidate) {
                return Ok(candidate);
            }
        }
    }
}
