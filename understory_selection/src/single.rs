// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-selection facade.

use core::ops::{Deref, DerefMut};

use crate::error::Error;
use crate::id::TicketKey;
use crate::options::SelectionOptions;
use crate::selection::Selection;
use crate::ticket::Ticket;

/// A [`Selection`] fixed to at most one selected ticket.
///
/// ```
/// use understory_selection::{Mandatory, SelectionOptions, Single, TicketInput};
///
/// let mut tabs: Single<u32, &str> = Single::new(SelectionOptions::single(Mandatory::Force)).unwrap();
/// let home = tabs.register(TicketInput::new("home")).unwrap();
/// let docs = tabs.register(TicketInput::new("docs")).unwrap();
/// assert_eq!(tabs.selected_id(), Some(&home));
/// tabs.select(&docs);
/// assert_eq!(tabs.selected_value(), Some(&"docs"));
/// ```
pub struct Single<K, V> {
    selection: Selection<K, V>,
}

impl<K: TicketKey, V> Single<K, V> {
    /// Create a single selection.
    ///
    /// Returns [`Error::InvalidOptions`] if `options.multiple` is set.
    pub fn new(options: SelectionOptions) -> Result<Self, Error> {
        if options.multiple {
            return Err(Error::InvalidOptions(
                "a single selection cannot be `multiple`",
            ));
        }
        Ok(Self {
            selection: Selection::new(options),
        })
    }

    /// The selected id, if any.
    pub fn selected_id(&self) -> Option<&K> {
        self.selection.selected_ids().next()
    }

    /// The selected ticket, if any.
    pub fn selected_item(&self) -> Option<&Ticket<K, V>> {
        self.selection.selected_items().next()
    }

    /// The selected ticket's value, if any.
    pub fn selected_value(&self) -> Option<&V> {
        self.selection.selected_values().next()
    }

    /// Select `id`, replacing the current selection.
    pub fn select(&mut self, id: &K) {
        self.selection.select(id);
    }

    /// Unwrap the underlying selection.
    pub fn into_inner(self) -> Selection<K, V> {
        self.selection
    }
}

impl<K: TicketKey, V> core::fmt::Debug for Single<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Single")
            .field("selection", &self.selection)
            .finish()
    }
}

impl<K, V> Deref for Single<K, V> {
    type Target = Selection<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.selection
    }
}

impl<K, V> DerefMut for Single<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Mandatory;
    use crate::ticket::TicketInput;

    fn single(mandatory: Mandatory) -> Single<&'static str, char> {
        let mut s = Single::new(SelectionOptions::single(mandatory)).unwrap();
        for (id, v) in [("a", 'a'), ("b", 'b'), ("c", 'c')] {
            s.register(TicketInput::with_id(id, v)).unwrap();
        }
        s
    }

    #[test]
    fn multiple_is_a_configuration_error() {
        let err = Single::<u32, ()>::new(SelectionOptions::multiple(Mandatory::Off)).unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn singular_accessors_follow_selection() {
        let mut s = single(Mandatory::Off);
        assert!(s.selected_id().is_none());
        assert!(s.selected_item().is_none());
        s.select(&"b");
        assert_eq!(s.selected_id(), Some(&"b"));
        assert_eq!(s.selected_value(), Some(&'b'));
        s.select(&"c");
        assert_eq!(s.selected_count(), 1);
        assert_eq!(s.selected_item().map(|t| *t.value()), Some('c'));
    }

    #[test]
    fn bulk_selection_is_ignored() {
        let mut s = single(Mandatory::Off);
        s.select_all();
        assert!(s.is_none_selected());
        s.toggle_all();
        assert!(s.is_none_selected());
        s.select(&"a");
        s.unselect_all();
        assert!(s.is_none_selected());
    }

    #[test]
    fn toggling_selected_item_under_force_moves_on() {
        let mut s = single(Mandatory::Force);
        assert_eq!(s.selected_id(), Some(&"a"));
        s.toggle(&"a");
        assert_eq!(s.selected_id(), Some(&"b"));
    }

    #[test]
    fn toggling_selected_item_under_required_is_blocked() {
        let mut s = single(Mandatory::Required);
        s.select(&"a");
        s.toggle(&"a");
        assert_eq!(s.selected_id(), Some(&"a"));
    }
}
