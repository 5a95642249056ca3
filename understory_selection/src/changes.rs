// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched change records returned by [`Selection::commit`](crate::Selection::commit).

use alloc::vec::Vec;

use bitflags::bitflags;

/// One recorded mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change<K> {
    /// A ticket was registered.
    Registered(K),
    /// A ticket was unregistered.
    Unregistered(K),
    /// A ticket entered the selection.
    Selected(K),
    /// A ticket left the selection.
    Unselected(K),
    /// A ticket's value or disabled flag changed in place.
    Updated(K),
}

impl<K> Change<K> {
    /// The id the change refers to.
    pub fn id(&self) -> &K {
        match self {
            Self::Registered(k)
            | Self::Unregistered(k)
            | Self::Selected(k)
            | Self::Unselected(k)
            | Self::Updated(k) => k,
        }
    }

    fn flag(&self) -> ChangeFlags {
        match self {
            Self::Registered(_) => ChangeFlags::REGISTERED,
            Self::Unregistered(_) => ChangeFlags::UNREGISTERED,
            Self::Selected(_) => ChangeFlags::SELECTED,
            Self::Unselected(_) => ChangeFlags::UNSELECTED,
            Self::Updated(_) => ChangeFlags::UPDATED,
        }
    }
}

bitflags! {
    /// Summary of the kinds of change present in a batch.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ChangeFlags: u8 {
        /// At least one ticket registered.
        const REGISTERED   = 0b0000_0001;
        /// At least one ticket unregistered.
        const UNREGISTERED = 0b0000_0010;
        /// At least one ticket selected.
        const SELECTED     = 0b0000_0100;
        /// At least one ticket unselected.
        const UNSELECTED   = 0b0000_1000;
        /// At least one ticket updated in place.
        const UPDATED      = 0b0001_0000;
    }
}

/// Changes accumulated since the previous commit, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Changes<K> {
    /// Individual records.
    pub changes: Vec<Change<K>>,
    /// Union of the kinds present in `changes`.
    pub flags: ChangeFlags,
}

impl<K> Default for Changes<K> {
    fn default() -> Self {
        Self {
            changes: Vec::new(),
            flags: ChangeFlags::empty(),
        }
    }
}

impl<K> Changes<K> {
    pub(crate) fn push(&mut self, change: Change<K>) {
        self.flags |= change.flag();
        self.changes.push(change);
    }

    /// True if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// True if the set of selected ids may differ from the previous commit.
    pub fn selection_changed(&self) -> bool {
        self.flags
            .intersects(ChangeFlags::SELECTED | ChangeFlags::UNSELECTED)
    }

    /// Iterate records in call order.
    pub fn iter(&self) -> impl Iterator<Item = &Change<K>> + '_ {
        self.changes.iter()
    }
}
