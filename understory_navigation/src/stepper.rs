// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear step navigation over a single selection.
//!
//! Steps are visited in registration order. Disabled steps are skipped, and
//! navigation stops at either end instead of wrapping.

use tracing::trace;
use understory_selection::{
    BindingId, Changes, Error, Mandatory, Model, ModelShape, SelectionOptions, Single,
    SubscriptionId, Ticket, TicketInput, TicketKey,
};

/// Current step of a multi-step flow.
pub struct Stepper<K, V> {
    steps: Single<K, V>,
}

impl<K: TicketKey, V> core::fmt::Debug for Stepper<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stepper").field("steps", &self.steps).finish()
    }
}

impl<K: TicketKey, V> Stepper<K, V> {
    /// Create an empty stepper with the given mandatory policy.
    pub fn new(mandatory: Mandatory) -> Result<Self, Error> {
        Ok(Self {
            steps: Single::new(SelectionOptions::single(mandatory))?,
        })
    }

    /// Append a step.
    pub fn register(&mut self, input: TicketInput<K, V>) -> Result<K, Error> {
        self.steps.register(input)
    }

    /// Remove a step.
    pub fn unregister(&mut self, id: &K) -> Option<Ticket<K, V>> {
        self.steps.unregister(id)
    }

    /// Enable or disable a step.
    pub fn set_disabled(&mut self, id: &K, disabled: bool) {
        self.steps.set_disabled(id, disabled);
    }

    /// The current step, if any.
    pub fn current(&self) -> Option<&Ticket<K, V>> {
        self.steps.selected_item()
    }

    /// Go to `id`. Unknown and disabled steps are ignored.
    pub fn select(&mut self, id: &K) {
        self.steps.select(id);
    }

    /// Go to the first enabled step.
    pub fn first(&mut self) {
        if let Some(id) = self.steps.registry().next_enabled(None).map(|t| t.id().clone()) {
            self.steps.select(&id);
        }
    }

    /// Go to the last enabled step.
    pub fn last(&mut self) {
        if let Some(id) = self.steps.registry().prev_enabled(None).map(|t| t.id().clone()) {
            self.steps.select(&id);
        }
    }

    /// Go to the next enabled step. With no current step, go to the first.
    pub fn next(&mut self) {
        let Some(at) = self.position() else {
            self.first();
            return;
        };
        match self.steps.registry().next_enabled(Some(at)).map(|t| t.id().clone()) {
            Some(id) => self.steps.select(&id),
            None => trace!("next ignored: already at the last enabled step"),
        }
    }

    /// Go to the previous enabled step. With no current step, go to the last.
    pub fn prev(&mut self) {
        let Some(at) = self.position() else {
            self.last();
            return;
        };
        match self.steps.registry().prev_enabled(Some(at)).map(|t| t.id().clone()) {
            Some(id) => self.steps.select(&id),
            None => trace!("prev ignored: already at the first enabled step"),
        }
    }

    /// Whether no enabled step comes before the current one.
    pub fn is_first(&self) -> bool {
        self.position()
            .is_some_and(|at| self.steps.registry().prev_enabled(Some(at)).is_none())
    }

    /// Whether no enabled step comes after the current one.
    pub fn is_last(&self) -> bool {
        self.position()
            .is_some_and(|at| self.steps.registry().next_enabled(Some(at)).is_none())
    }

    /// Flush the underlying selection.
    pub fn commit(&mut self) -> Changes<K> {
        self.steps.commit()
    }

    /// Read-only view of the underlying selection.
    pub fn selection(&self) -> &Single<K, V> {
        &self.steps
    }

    /// Bind a model of ticket values. See
    /// [`Selection::bind_values`](understory_selection::Selection::bind_values).
    pub fn bind_values<M>(&mut self, model: Model<M>) -> Result<BindingId, Error>
    where
        V: Clone + PartialEq + 'static,
        M: ModelShape<V>,
    {
        self.steps.bind_values(model)
    }

    /// Bind a model of tickets. See
    /// [`Selection::bind_objects`](understory_selection::Selection::bind_objects).
    pub fn bind_objects<M>(&mut self, model: Model<M>) -> Result<BindingId, Error>
    where
        V: Clone + PartialEq + 'static,
        M: ModelShape<Ticket<K, V>>,
    {
        self.steps.bind_objects(model)
    }

    /// Detach a model binding.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        self.steps.unbind(id)
    }

    /// Call `f` with every non-empty batch produced by [`commit`](Self::commit).
    pub fn subscribe(&mut self, f: impl FnMut(&Changes<K>) + 'static) -> SubscriptionId {
        self.steps.subscribe(f)
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.steps.unsubscribe(id)
    }

    /// Tear down bindings, subscribers and tickets.
    pub fn dispose(&mut self) {
        self.steps.dispose();
    }

    fn position(&self) -> Option<usize> {
        self.steps
            .selected_id()
            .and_then(|id| self.steps.registry().index_of(id))
    }
}
