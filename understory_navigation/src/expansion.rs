// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion panels: accordion or independently expanding.

use serde::{Deserialize, Serialize};
use understory_selection::{
    BindingId, Changes, Error, Group, Mandatory, Model, ModelShape, Selection, SelectionOptions,
    Single, SubscriptionId, Ticket, TicketInput, TicketKey,
};

/// How panels expand relative to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpansionMode {
    /// At most one panel is open; opening one closes the others.
    #[default]
    Accordion,
    /// Panels open and close independently.
    Multiple,
}

/// A set of expandable panels.
///
/// A panel is expanded exactly when its ticket is selected. Whether a
/// collapsed panel's content exists at all is up to the caller.
pub struct ExpansionPanel<K, V> {
    panels: Selection<K, V>,
    mode: ExpansionMode,
}

impl<K: TicketKey, V> core::fmt::Debug for ExpansionPanel<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExpansionPanel")
            .field("mode", &self.mode)
            .field("panels", &self.panels)
            .finish()
    }
}

impl<K: TicketKey, V> ExpansionPanel<K, V> {
    /// Create an empty panel set.
    pub fn new(mode: ExpansionMode, mandatory: Mandatory) -> Result<Self, Error> {
        let panels = match mode {
            ExpansionMode::Accordion => {
                Single::new(SelectionOptions::single(mandatory))?.into_inner()
            }
            ExpansionMode::Multiple => Group::new(SelectionOptions::multiple(mandatory)).into_inner(),
        };
        Ok(Self { panels, mode })
    }

    /// The expansion mode.
    pub fn mode(&self) -> ExpansionMode {
        self.mode
    }

    /// Add a panel.
    pub fn register(&mut self, input: TicketInput<K, V>) -> Result<K, Error> {
        self.panels.register(input)
    }

    /// Remove a panel.
    pub fn unregister(&mut self, id: &K) -> Option<Ticket<K, V>> {
        self.panels.unregister(id)
    }

    /// Enable or disable a panel. Disabling an open panel closes it.
    pub fn set_disabled(&mut self, id: &K, disabled: bool) {
        self.panels.set_disabled(id, disabled);
    }

    /// Open a panel. In accordion mode this closes the open one.
    pub fn expand(&mut self, id: &K) {
        self.panels.select(id);
    }

    /// Close a panel, subject to the mandatory policy.
    pub fn collapse(&mut self, id: &K) {
        self.panels.unselect(id);
    }

    /// Open a closed panel or close an open one.
    pub fn toggle(&mut self, id: &K) {
        self.panels.toggle(id);
    }

    /// Open every enabled panel. No-op in accordion mode.
    pub fn expand_all(&mut self) {
        self.panels.select_all();
    }

    /// Close every panel the mandatory policy allows.
    pub fn collapse_all(&mut self) {
        self.panels.unselect_all();
    }

    /// Whether a panel is open.
    pub fn is_expanded(&self, id: &K) -> bool {
        self.panels.is_selected(id)
    }

    /// Open panels, in the order they were opened.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.panels.selected_ids()
    }

    /// Flush the underlying selection.
    pub fn commit(&mut self) -> Changes<K> {
        self.panels.commit()
    }

    /// Read-only view of the underlying selection.
    pub fn selection(&self) -> &Selection<K, V> {
        &self.panels
    }

    /// Bind a model of ticket values. See
    /// [`Selection::bind_values`](understory_selection::Selection::bind_values).
    pub fn bind_values<M>(&mut self, model: Model<M>) -> Result<BindingId, Error>
    where
        V: Clone + PartialEq + 'static,
        M: ModelShape<V>,
    {
        self.panels.bind_values(model)
    }

    /// Bind a model of tickets. See
    /// [`Selection::bind_objects`](understory_selection::Selection::bind_objects).
    pub fn bind_objects<M>(&mut self, model: Model<M>) -> Result<BindingId, Error>
    where
        V: Clone + PartialEq + 'static,
        M: ModelShape<Ticket<K, V>>,
    {
        self.panels.bind_objects(model)
    }

    /// Detach a model binding.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        self.panels.unbind(id)
    }

    /// Call `f` with every non-empty batch produced by [`commit`](Self::commit).
    pub fn subscribe(&mut self, f: impl FnMut(&Changes<K>) + 'static) -> SubscriptionId {
        self.panels.subscribe(f)
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.panels.unsubscribe(id)
    }

    /// Tear down bindings, subscribers and tickets.
    pub fn dispose(&mut self) {
        self.panels.dispose();
    }
}
