// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multiple-selection facade.

use core::ops::{Deref, DerefMut};

use crate::id::TicketKey;
use crate::options::SelectionOptions;
use crate::selection::Selection;

/// A [`Selection`] fixed to multiple mode.
///
/// Dereferences to the underlying selection, so every store operation and
/// aggregate (`is_all_selected`, `is_mixed`, ...) is available verbatim.
///
/// ```
/// use understory_selection::{Group, SelectionOptions, TicketInput};
///
/// let mut group: Group<u32, &str> = Group::new(SelectionOptions::default());
/// let a = group.register(TicketInput::new("a")).unwrap();
/// let _b = group.register(TicketInput::new("b")).unwrap();
/// group.select(&a);
/// assert!(group.is_mixed());
/// group.select_all();
/// assert!(group.is_all_selected());
/// ```
pub struct Group<K, V> {
    selection: Selection<K, V>,
}

impl<K: TicketKey, V> Group<K, V> {
    /// Create a group. `options.multiple` is always treated as `true`.
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            selection: Selection::new(SelectionOptions {
                multiple: true,
                ..options
            }),
        }
    }

    /// Select each id in order.
    pub fn select_many<'a>(&mut self, ids: impl IntoIterator<Item = &'a K>) {
        for id in ids {
            self.selection.select(id);
        }
    }

    /// Unselect each id in order.
    pub fn unselect_many<'a>(&mut self, ids: impl IntoIterator<Item = &'a K>) {
        for id in ids {
            self.selection.unselect(id);
        }
    }

    /// Unwrap the underlying selection.
    pub fn into_inner(self) -> Selection<K, V> {
        self.selection
    }
}

impl<K: TicketKey, V> core::fmt::Debug for Group<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Group")
            .field("selection", &self.selection)
            .finish()
    }
}

impl<K, V> Deref for Group<K, V> {
    type Target = Selection<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.selection
    }
}

impl<K, V> DerefMut for Group<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.selection
    }
}
