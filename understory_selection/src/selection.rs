// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection store: a registry plus the set of selected ids.
//!
//! ## Invariants
//!
//! After every public call returns:
//!
//! - Selected ids are registered and enabled.
//! - A single selection (`multiple = false`) holds at most one id.
//! - Under [`Mandatory::Force`], the selection is non-empty whenever an
//!   enabled ticket exists.
//! - Under [`Mandatory::Required`], a non-empty selection stays non-empty while
//!   an enabled ticket exists.
//!
//! ## Fallback
//!
//! When the last selected ticket must go (forced unselect, unregister, or
//! disable), the replacement is the next enabled ticket after it in
//! registration order, wrapping to the first enabled ticket.
//!
//! ## No-ops
//!
//! Mutations naming an unknown or disabled id do nothing. Unselecting the last
//! ticket under [`Mandatory::Required`] does nothing. In single mode,
//! [`select_all`](Selection::select_all) and [`toggle_all`](Selection::toggle_all)
//! do nothing; [`unselect_all`](Selection::unselect_all) works in both modes.
//!
//! ## Batching
//!
//! Mutations record [`Change`]s. [`commit`](Selection::commit) runs model
//! bindings, then hands the batch to subscribers and returns it.

use alloc::boxed::Box;
use alloc::vec::Vec;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use crate::changes::{Change, Changes};
use crate::error::Error;
use crate::id::TicketKey;
use crate::model::{Binding, Model, ModelShape, Objects, Projection, Synchronize, Values};
use crate::options::{Mandatory, SelectionOptions};
use crate::registry::Registry;
use crate::ticket::{Ticket, TicketInput};

/// Handle returned by [`Selection::bind_values`] and [`Selection::bind_objects`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

/// Handle returned by [`Selection::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<K> = Box<dyn FnMut(&Changes<K>)>;

/// Registry-backed selection engine.
pub struct Selection<K, V> {
    registry: Registry<K, V>,
    selected: IndexSet<K, FxBuildHasher>,
    options: SelectionOptions,
    pending: Changes<K>,
    revision: u64,
    registry_revision: u64,
    bindings: Vec<(BindingId, Box<dyn Synchronize<K, V>>)>,
    subscribers: Vec<(SubscriptionId, Subscriber<K>)>,
    next_handle: u64,
    disposed: bool,
}

impl<K: TicketKey, V> core::fmt::Debug for Selection<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Selection")
            .field("options", &self.options)
            .field("registry", &self.registry)
            .field("selected", &self.selected)
            .field("pending", &self.pending.changes.len())
            .field("bindings", &self.bindings.len())
            .field("subscribers", &self.subscribers.len())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl<K: TicketKey, V> Selection<K, V> {
    /// Create an empty selection.
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            registry: Registry::new(),
            selected: IndexSet::with_hasher(FxBuildHasher),
            options,
            pending: Changes::default(),
            revision: 0,
            registry_revision: 0,
            bindings: Vec::new(),
            subscribers: Vec::new(),
            next_handle: 0,
            disposed: false,
        }
    }

    /// Options fixed at construction.
    pub fn options(&self) -> SelectionOptions {
        self.options
    }

    /// Read-only view of the registered tickets.
    pub fn registry(&self) -> &Registry<K, V> {
        &self.registry
    }

    // --- Registration ---------------------------------------------------------

    /// Register a ticket and return its id.
    ///
    /// Under [`Mandatory::Force`] the first enabled ticket is selected as soon as
    /// it registers.
    pub fn register(&mut self, input: TicketInput<K, V>) -> Result<K, Error> {
        if self.disposed {
            return Err(Error::Disposed);
        }
        let id = self.registry.register(input)?;
        self.registry_revision += 1;
        self.pending.push(Change::Registered(id.clone()));
        self.heal();
        Ok(id)
    }

    /// Unregister a ticket, returning it.
    ///
    /// If it was the last selected ticket under a mandatory policy, the fallback
    /// is computed while the departing ticket is still registered and selected
    /// once it is gone.
    pub fn unregister(&mut self, id: &K) -> Option<Ticket<K, V>> {
        if !self.registry.contains(id) {
            trace!(id = ?id, "unregister ignored: unknown id");
            return None;
        }
        let mut fallback = None;
        if self.selected.contains(id) {
            fallback = self.fallback_for(id);
            self.remove_selected(id);
        }
        let ticket = self.registry.unregister(id)?;
        self.registry_revision += 1;
        self.pending.push(Change::Unregistered(id.clone()));
        if let Some(next) = fallback {
            debug!(departed = ?id, fallback = ?next, "mandatory fallback after unregister");
            self.insert_selected(next);
        }
        Some(ticket)
    }

    /// Unregister every ticket and drop the selection.
    pub fn clear(&mut self) {
        for id in self.selected.drain(..) {
            self.pending.push(Change::Unselected(id));
        }
        for id in self.registry.ids() {
            self.pending.push(Change::Unregistered(id.clone()));
        }
        if !self.registry.is_empty() {
            self.revision += 1;
            self.registry_revision += 1;
        }
        self.registry.clear();
    }

    /// Enable or disable a ticket in place.
    ///
    /// Disabling a selected ticket unselects it; under a mandatory policy the
    /// fallback rule picks a replacement if it was the last one.
    pub fn set_disabled(&mut self, id: &K, disabled: bool) {
        if !self.registry.set_disabled(id, disabled) {
            return;
        }
        self.registry_revision += 1;
        self.pending.push(Change::Updated(id.clone()));
        if disabled && self.selected.contains(id) {
            let fallback = self.fallback_for(id);
            self.remove_selected(id);
            if let Some(next) = fallback {
                debug!(disabled = ?id, fallback = ?next, "mandatory fallback after disable");
                self.insert_selected(next);
            }
        }
        self.heal();
    }

    /// Replace a ticket's value, returning the previous one.
    pub fn set_value(&mut self, id: &K, value: V) -> Option<V> {
        let previous = self.registry.set_value(id, value)?;
        self.registry_revision += 1;
        self.pending.push(Change::Updated(id.clone()));
        Some(previous)
    }

    // --- Selection mutations --------------------------------------------------

    /// Select `id`. In single mode this replaces the current selection.
    pub fn select(&mut self, id: &K) {
        if !self.registry.is_enabled(id) {
            trace!(id = ?id, "select ignored: unknown or disabled");
            return;
        }
        if self.selected.contains(id) {
            return;
        }
        if !self.options.multiple {
            for previous in self.selected.drain(..) {
                self.pending.push(Change::Unselected(previous));
            }
        }
        self.insert_selected(id.clone());
    }

    /// Unselect `id`, subject to the mandatory policy.
    pub fn unselect(&mut self, id: &K) {
        if !self.selected.contains(id) {
            return;
        }
        if self.selected.len() == 1 {
            match self.options.mandatory {
                Mandatory::Off => {}
                Mandatory::Required => {
                    trace!(id = ?id, "unselect blocked: mandatory");
                    return;
                }
                Mandatory::Force => {
                    let Some(next) = self.fallback_for(id) else {
                        trace!(id = ?id, "unselect blocked: no fallback candidate");
                        return;
                    };
                    debug!(unselected = ?id, fallback = ?next, "mandatory fallback after unselect");
                    self.remove_selected(id);
                    self.insert_selected(next);
                    return;
                }
            }
        }
        self.remove_selected(id);
    }

    /// Unselect `id` if selected, otherwise select it.
    pub fn toggle(&mut self, id: &K) {
        if self.selected.contains(id) {
            self.unselect(id);
        } else {
            self.select(id);
        }
    }

    /// Select every enabled ticket in registration order. No-op in single mode.
    pub fn select_all(&mut self) {
        if !self.options.multiple {
            trace!("select_all ignored: single mode");
            return;
        }
        for id in self.enabled_ids() {
            self.select(&id);
        }
    }

    /// Unselect every enabled ticket in registration order.
    ///
    /// Each step follows [`unselect`](Self::unselect), so a mandatory policy
    /// keeps or heals the last selection.
    pub fn unselect_all(&mut self) {
        for id in self.enabled_ids() {
            self.unselect(&id);
        }
    }

    /// Toggle every enabled ticket in registration order. No-op in single mode.
    pub fn toggle_all(&mut self) {
        if !self.options.multiple {
            trace!("toggle_all ignored: single mode");
            return;
        }
        for id in self.enabled_ids() {
            self.toggle(&id);
        }
    }

    // --- Reads ----------------------------------------------------------------

    /// Look up a ticket.
    pub fn get(&self, id: &K) -> Option<&Ticket<K, V>> {
        self.registry.get(id)
    }

    /// Tickets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Ticket<K, V>> + '_ {
        self.registry.iter()
    }

    /// Number of registered tickets.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if no tickets are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.selected.iter()
    }

    /// Selected tickets in selection order.
    pub fn selected_items(&self) -> impl Iterator<Item = &Ticket<K, V>> + '_ {
        self.selected.iter().filter_map(|id| self.registry.get(id))
    }

    /// Values of the selected tickets in selection order.
    pub fn selected_values(&self) -> impl Iterator<Item = &V> + '_ {
        self.selected_items().map(Ticket::value)
    }

    /// Number of selected tickets.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// True if at least one enabled ticket exists and all of them are selected.
    pub fn is_all_selected(&self) -> bool {
        let mut enabled = self.registry.enabled_ids().peekable();
        enabled.peek().is_some() && enabled.all(|id| self.selected.contains(id))
    }

    /// True if nothing is selected.
    pub fn is_none_selected(&self) -> bool {
        self.selected.is_empty()
    }

    /// True if some, but not all, enabled tickets are selected.
    pub fn is_mixed(&self) -> bool {
        !self.is_none_selected() && !self.is_all_selected()
    }

    // --- Batching, subscription, binding --------------------------------------

    /// Flush: synchronize bound models, notify subscribers, return the batch.
    pub fn commit(&mut self) -> Changes<K> {
        let mut bindings = core::mem::take(&mut self.bindings);
        for (_, binding) in &mut bindings {
            binding.sync(self);
        }
        bindings.append(&mut self.bindings);
        self.bindings = bindings;

        let changes = core::mem::take(&mut self.pending);
        if !changes.is_empty() {
            for (_, subscriber) in &mut self.subscribers {
                subscriber(&changes);
            }
        }
        changes
    }

    /// Call `f` with every non-empty batch produced by [`commit`](Self::commit).
    ///
    /// Subscribing to a disposed selection returns a handle that is never called.
    pub fn subscribe(&mut self, f: impl FnMut(&Changes<K>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_handle());
        if !self.disposed {
            self.subscribers.push((id, Box::new(f)));
        }
        id
    }

    /// Remove a subscriber. Returns `false` if it was not present.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Bind a model of ticket values (`return_object = false`).
    ///
    /// Use `Model<Option<V>>` for single selections and `Model<Vec<V>>` for
    /// multiple selections.
    pub fn bind_values<M>(&mut self, model: Model<M>) -> Result<BindingId, Error>
    where
        V: Clone + PartialEq + 'static,
        M: ModelShape<V>,
    {
        self.attach::<Values, M>(model)
    }

    /// Bind a model of ticket objects (`return_object = true`).
    pub fn bind_objects<M>(&mut self, model: Model<M>) -> Result<BindingId, Error>
    where
        V: Clone + PartialEq + 'static,
        M: ModelShape<Ticket<K, V>>,
    {
        self.attach::<Objects, M>(model)
    }

    /// Detach a binding. Returns `false` if it was not present.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|(bid, _)| *bid != id);
        self.bindings.len() != before
    }

    /// Tear down: drop bindings, subscribers, tickets and the selection.
    ///
    /// Afterwards [`register`](Self::register) and binding return
    /// [`Error::Disposed`], and every other operation is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug!(tickets = self.registry.len(), "dispose selection");
        self.bindings.clear();
        self.subscribers.clear();
        self.selected.clear();
        self.registry.clear();
        self.pending = Changes::default();
        self.disposed = true;
    }

    /// Whether [`dispose`](Self::dispose) was called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // --- Internals ------------------------------------------------------------

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn registry_revision(&self) -> u64 {
        self.registry_revision
    }

    /// Make the selection match `target` as far as policy allows.
    pub(crate) fn reconcile(&mut self, target: &[K]) {
        if target.is_empty() && self.options.mandatory.is_on() && !self.selected.is_empty() {
            trace!("model cleared; mandatory keeps the current selection");
            return;
        }
        for id in target {
            self.select(id);
        }
        let stale: Vec<K> = self
            .selected
            .iter()
            .filter(|id| !target.contains(id))
            .cloned()
            .collect();
        for id in &stale {
            self.unselect(id);
        }
        let rank = |id: &K| target.iter().position(|t| t == id).unwrap_or(usize::MAX);
        self.selected.sort_by(|a, b| rank(a).cmp(&rank(b)));
    }

    fn attach<P, M>(&mut self, model: Model<M>) -> Result<BindingId, Error>
    where
        P: Projection<K, V>,
        M: ModelShape<P::Item>,
        V: 'static,
    {
        if self.disposed {
            return Err(Error::Disposed);
        }
        if P::RETURN_OBJECT != self.options.return_object {
            return Err(Error::InvalidOptions(
                "model element type does not match `return_object`",
            ));
        }
        if M::LIST != self.options.multiple {
            return Err(Error::InvalidOptions(
                "single selections bind `Option` models and multiple selections bind `Vec` models",
            ));
        }
        let id = BindingId(self.next_handle());
        let binding = Binding::<K, V, P, M>::new(model, self.revision, self.registry_revision);
        self.bindings.push((id, Box::new(binding)));
        Ok(id)
    }

    fn next_handle(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }

    fn enabled_ids(&self) -> Vec<K> {
        self.registry.enabled_ids().cloned().collect()
    }

    fn insert_selected(&mut self, id: K) {
        if self.selected.insert(id.clone()) {
            self.revision += 1;
            self.pending.push(Change::Selected(id));
        }
    }

    fn remove_selected(&mut self, id: &K) {
        if self.selected.shift_remove(id) {
            self.revision += 1;
            self.pending.push(Change::Unselected(id.clone()));
        }
    }

    /// Replacement for `departing` when it is the last selected id under a
    /// mandatory policy.
    fn fallback_for(&self, departing: &K) -> Option<K> {
        if !self.options.mandatory.is_on() || self.selected.len() != 1 {
            return None;
        }
        let after = self.registry.index_of(departing);
        self.registry
            .next_enabled(after)
            .or_else(|| self.registry.find(|t| !t.disabled && t.id != *departing))
            .map(|t| t.id.clone())
    }

    /// Under [`Mandatory::Force`], select the first enabled ticket if nothing is selected.
    fn heal(&mut self) {
        if self.options.mandatory != Mandatory::Force || !self.selected.is_empty() {
            return;
        }
        if let Some(first) = self.registry.next_enabled(None) {
            let first = first.id.clone();
            debug!(id = ?first, "mandatory force: auto-select first enabled ticket");
            self.insert_selected(first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changes::ChangeFlags;
    use alloc::rc::Rc;
    use core::cell::RefCell;

    fn abc(options: SelectionOptions) -> Selection<&'static str, char> {
        let mut s = Selection::new(options);
        for (id, v) in [("a", 'a'), ("b", 'b'), ("c", 'c')] {
            s.register(TicketInput::with_id(id, v)).unwrap();
        }
        s
    }

    fn selected(s: &Selection<&'static str, char>) -> Vec<&'static str> {
        s.selected_ids().copied().collect()
    }

    #[test]
    fn force_selects_first_ticket_on_registration() {
        let mut s = Selection::new(SelectionOptions::single(Mandatory::Force));
        s.register(TicketInput::with_id("a", 'a')).unwrap();
        assert_eq!(selected(&s), ["a"]);
        s.register(TicketInput::with_id("b", 'b')).unwrap();
        s.register(TicketInput::with_id("c", 'c')).unwrap();
        assert_eq!(selected(&s), ["a"]);
    }

    #[test]
    fn force_skips_disabled_tickets_on_registration() {
        let mut s = Selection::new(SelectionOptions::single(Mandatory::Force));
        s.register(TicketInput::with_id("a", 'a').disabled(true))
            .unwrap();
        assert!(s.is_none_selected());
        s.register(TicketInput::with_id("b", 'b')).unwrap();
        assert_eq!(selected(&s), ["b"]);
    }

    #[test]
    fn multiple_select_and_unselect() {
        let mut s = abc(SelectionOptions::multiple(Mandatory::Off));
        s.select(&"a");
        s.select(&"b");
        assert_eq!(selected(&s), ["a", "b"]);
        s.unselect(&"a");
        assert_eq!(selected(&s), ["b"]);
    }

    #[test]
    fn single_select_replaces() {
        let mut s = abc(SelectionOptions::single(Mandatory::Off));
        s.select(&"a");
        s.select(&"c");
        assert_eq!(selected(&s), ["c"]);
    }

    #[test]
    fn required_blocks_unselecting_last() {
        let mut s = abc(SelectionOptions::single(Mandatory::Required));
        assert!(s.is_none_selected());
        s.select(&"a");
        s.unselect(&"a");
        assert_eq!(selected(&s), ["a"]);
    }

    #[test]
    fn disabled_ticket_ignores_selection() {
        let mut s = Selection::new(SelectionOptions::multiple(Mandatory::Off));
        s.register(TicketInput::with_id("a", 'a')).unwrap();
        s.register(TicketInput::with_id("c", 'c').disabled(true))
            .unwrap();
        s.select(&"c");
        assert!(s.is_none_selected());
        s.toggle(&"c");
        assert!(s.is_none_selected());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut s = abc(SelectionOptions::multiple(Mandatory::Off));
        s.select(&"zz");
        s.toggle(&"zz");
        s.unselect(&"zz");
        assert!(s.unregister(&"zz").is_none());
        assert!(s.is_none_selected());
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn unregister_selected_falls_back_to_next() {
        let mut s = abc(SelectionOptions::single(Mandatory::Force));
        s.select(&"b");
        let gone = s.unregister(&"b").unwrap();
        assert_eq!(*gone.value(), 'b');
        assert_eq!(selected(&s), ["c"]);
    }

    #[test]
    fn unregister_last_wraps_to_first() {
        let mut s = abc(SelectionOptions::single(Mandatory::Force));
        s.select(&"c");
        s.unregister(&"c");
        assert_eq!(selected(&s), ["a"]);
    }

    #[test]
    fn fallback_skips_disabled() {
        let mut s = abc(SelectionOptions::single(Mandatory::Force));
        s.set_disabled(&"b", true);
        s.unregister(&"a");
        assert_eq!(selected(&s), ["c"]);
    }

    #[test]
    fn required_heals_when_last_selected_leaves() {
        let mut s = abc(SelectionOptions::single(Mandatory::Required));
        s.select(&"a");
        s.unregister(&"a");
        assert_eq!(selected(&s), ["b"]);
    }

    #[test]
    fn unregister_without_mandatory_empties() {
        let mut s = abc(SelectionOptions::single(Mandatory::Off));
        s.select(&"b");
        s.unregister(&"b");
        assert!(s.is_none_selected());
    }

    #[test]
    fn force_unselect_moves_to_fallback() {
        let mut s = abc(SelectionOptions::multiple(Mandatory::Force));
        assert_eq!(selected(&s), ["a"]);
        s.unselect(&"a");
        assert_eq!(selected(&s), ["b"]);
    }

    #[test]
    fn force_unselect_of_only_candidate_is_blocked() {
        let mut s = Selection::new(SelectionOptions::single(Mandatory::Force));
        s.register(TicketInput::with_id("a", 'a')).unwrap();
        s.unselect(&"a");
        assert_eq!(selected(&s), ["a"]);
    }

    #[test]
    fn disabling_selected_ticket_unselects_it() {
        let mut s = abc(SelectionOptions::multiple(Mandatory::Off));
        s.select_all();
        s.set_disabled(&"b", true);
        assert_eq!(selected(&s), ["a", "c"]);
        assert!(s.is_all_selected());
    }

    #[test]
    fn disabling_last_selected_under_force_falls_back() {
        let mut s = abc(SelectionOptions::single(Mandatory::Force));
        s.set_disabled(&"a", true);
        assert_eq!(selected(&s), ["b"]);
    }

    #[test]
    fn enabling_first_ticket_under_force_selects_it() {
        let mut s = Selection::new(SelectionOptions::single(Mandatory::Force));
        s.register(TicketInput::with_id("a", 'a').disabled(true))
            .unwrap();
        assert!(s.is_none_selected());
        s.set_disabled(&"a", false);
        assert_eq!(selected(&s), ["a"]);
    }

    #[test]
    fn toggle_twice_restores_multiple_selection() {
        let mut s = abc(SelectionOptions::multiple(Mandatory::Off));
        s.select(&"c");
        let before = selected(&s);
        s.toggle(&"a");
        s.toggle(&"a");
        assert_eq!(selected(&s), before);
    }

    #[test]
    fn aggregates_ignore_empty_registry() {
        let s: Selection<&'static str, char> =
            Selection::new(SelectionOptions::multiple(Mandatory::Off));
        assert!(!s.is_all_selected());
        assert!(s.is_none_selected());
        assert!(!s.is_mixed());
    }

    #[test]
    fn commit_batches_changes_in_call_order() {
        let mut s = abc(SelectionOptions::single(Mandatory::Off));
        let registered = s.commit();
        assert_eq!(registered.flags, ChangeFlags::REGISTERED);
        s.select(&"a");
        s.select(&"b");
        let changes = s.commit();
        assert_eq!(
            changes.changes,
            [
                Change::Selected("a"),
                Change::Unselected("a"),
                Change::Selected("b"),
            ]
        );
        assert!(s.commit().is_empty());
    }

    #[test]
    fn subscribers_see_each_non_empty_batch_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut s = abc(SelectionOptions::multiple(Mandatory::Off));
        let sink = Rc::clone(&seen);
        let sub = s.subscribe(move |c| sink.borrow_mut().push(c.changes.len()));
        let _ = s.commit();
        let _ = s.commit();
        s.select(&"a");
        let _ = s.commit();
        assert_eq!(*seen.borrow(), [3, 1]);
        assert!(s.unsubscribe(sub));
        assert!(!s.unsubscribe(sub));
        s.select(&"b");
        let _ = s.commit();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn set_value_records_update() {
        let mut s = abc(SelectionOptions::single(Mandatory::Off));
        let _ = s.commit();
        assert_eq!(s.set_value(&"a", 'z'), Some('a'));
        assert_eq!(s.get(&"a").map(|t| *t.value()), Some('z'));
        assert_eq!(s.commit().changes, [Change::Updated("a")]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut s = abc(SelectionOptions::single(Mandatory::Force));
        let _ = s.commit();
        s.clear();
        assert!(s.is_empty());
        assert!(s.is_none_selected());
        let changes = s.commit();
        assert!(changes.flags.contains(ChangeFlags::UNSELECTED | ChangeFlags::UNREGISTERED));
        s.register(TicketInput::with_id("d", 'd')).unwrap();
        assert_eq!(selected(&s), ["d"]);
    }

    #[test]
    fn dispose_rejects_registration_and_silences_mutations() {
        let mut s = abc(SelectionOptions::multiple(Mandatory::Off));
        s.select(&"a");
        s.dispose();
        assert!(s.is_disposed());
        assert!(s.is_empty());
        assert_eq!(
            s.register(TicketInput::with_id("d", 'd')).unwrap_err(),
            Error::Disposed
        );
        s.select(&"a");
        assert!(s.is_none_selected());
        assert!(s.commit().is_empty());
        assert_eq!(
            s.bind_values(Model::new(Vec::<char>::new())).unwrap_err(),
            Error::Disposed
        );
    }
}
