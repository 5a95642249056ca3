// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-way binding between a selection and a consumer-owned model value.
//!
//! ## Model values
//!
//! A [`Model`] is a shared, versioned cell owned by the consumer. Clones share
//! the same value. Every [`Model::set`] bumps the version, which is how the
//! synchronizer notices external writes.
//!
//! The model's shape follows the selection mode: `Option<T>` for single
//! selections and `Vec<T>` for multiple selections (see [`ModelShape`]).
//! `T` is the ticket value when `return_object` is off, or the whole
//! [`Ticket`] when it is on.
//!
//! ## Flush order
//!
//! Bindings run inside [`Selection::commit`]. For each binding:
//!
//! 1. If the model changed since the last flush, the store is reconciled to
//!    it (Model → Store). An external write wins over store mutations in the
//!    same batch.
//! 2. Otherwise, if tickets were registered, unregistered or updated, entries
//!    that named no enabled ticket at the previous flush and now do are
//!    selected. The model is then refreshed from the selection, so an
//!    in-place value update never changes which tickets are selected.
//! 3. Otherwise, if the selection changed, the projected selection is written
//!    to the model (Store → Model).
//!
//! Entries naming an unknown or disabled ticket are skipped and never move
//! the selection. Writes always compare before writing; after a reconcile the
//! model is only rewritten when policy (mandatory, disabled) made the store
//! diverge from the model's resolvable entries.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::marker::PhantomData;

use tracing::trace;

use crate::id::TicketKey;
use crate::selection::Selection;
use crate::ticket::Ticket;

/// Consumer-owned, shared, versioned model value.
///
/// Single-threaded. Do not call [`set`](Self::set) from inside
/// [`with`](Self::with) on the same model.
pub struct Model<M> {
    inner: Rc<RefCell<ModelCell<M>>>,
}

struct ModelCell<M> {
    value: M,
    version: u64,
}

impl<M> Clone for Model<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<M: core::fmt::Debug> core::fmt::Debug for Model<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cell = self.inner.borrow();
        f.debug_struct("Model")
            .field("value", &cell.value)
            .field("version", &cell.version)
            .finish()
    }
}

impl<M> Model<M> {
    /// Create a model holding `value`.
    pub fn new(value: M) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ModelCell { value, version: 0 })),
        }
    }

    /// Replace the value.
    pub fn set(&self, value: M) {
        let mut cell = self.inner.borrow_mut();
        cell.value = value;
        cell.version += 1;
    }

    /// Mutate the value in place.
    pub fn update(&self, f: impl FnOnce(&mut M)) {
        let mut cell = self.inner.borrow_mut();
        f(&mut cell.value);
        cell.version += 1;
    }

    /// Read the value.
    pub fn with<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of writes since creation.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }
}

impl<M: Clone> Model<M> {
    /// Clone the current value out.
    pub fn get(&self) -> M {
        self.inner.borrow().value.clone()
    }
}

/// Shape of a model value: a single optional item or an ordered list.
pub trait ModelShape<T>: 'static {
    /// Whether the shape holds a list (multiple selection).
    const LIST: bool;

    /// The items currently held, in order.
    fn items(&self) -> Vec<T>;

    /// Build the shape from projected items.
    fn from_items(items: Vec<T>) -> Self;
}

impl<T: Clone + 'static> ModelShape<T> for Option<T> {
    const LIST: bool = false;

    fn items(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn from_items(items: Vec<T>) -> Self {
        items.into_iter().next()
    }
}

impl<T: Clone + 'static> ModelShape<T> for Vec<T> {
    const LIST: bool = true;

    fn items(&self) -> Vec<T> {
        self.clone()
    }

    fn from_items(items: Vec<T>) -> Self {
        items
    }
}

/// How tickets map to model items and back.
pub(crate) trait Projection<K, V>: 'static {
    type Item: Clone + PartialEq + 'static;
    const RETURN_OBJECT: bool;

    fn project(ticket: &Ticket<K, V>) -> Self::Item;
    fn matches(ticket: &Ticket<K, V>, item: &Self::Item) -> bool;
}

/// Model items are ticket values, matched by value equality.
pub(crate) struct Values;

impl<K, V: Clone + PartialEq + 'static> Projection<K, V> for Values {
    type Item = V;
    const RETURN_OBJECT: bool = false;

    fn project(ticket: &Ticket<K, V>) -> V {
        ticket.value.clone()
    }

    fn matches(ticket: &Ticket<K, V>, item: &V) -> bool {
        ticket.value == *item
    }
}

/// Model items are ticket objects, matched by ticket identity.
pub(crate) struct Objects;

impl<K, V> Projection<K, V> for Objects
where
    K: Clone + PartialEq + 'static,
    V: Clone + PartialEq + 'static,
{
    type Item = Ticket<K, V>;
    const RETURN_OBJECT: bool = true;

    fn project(ticket: &Ticket<K, V>) -> Ticket<K, V> {
        ticket.clone()
    }

    fn matches(ticket: &Ticket<K, V>, item: &Ticket<K, V>) -> bool {
        ticket.id == item.id
    }
}

/// Type-erased binding driven by [`Selection::commit`].
pub(crate) trait Synchronize<K, V> {
    fn sync(&mut self, selection: &mut Selection<K, V>);
}

pub(crate) struct Binding<K, V, P: Projection<K, V>, M> {
    model: Model<M>,
    seen_model: Option<u64>,
    seen_store: u64,
    seen_registry: u64,
    /// Model entries that matched no enabled ticket at the previous flush.
    unresolved: Vec<P::Item>,
    _marker: PhantomData<fn() -> (K, V)>,
}

/// Model entries split by whether they name an enabled ticket.
struct Resolution<K, T> {
    target: Vec<K>,
    resolvable: Vec<T>,
    unresolved: Vec<T>,
}

impl<K, V, P, M> Binding<K, V, P, M>
where
    K: TicketKey,
    P: Projection<K, V>,
    M: ModelShape<P::Item>,
{
    pub(crate) fn new(model: Model<M>, store_revision: u64, registry_revision: u64) -> Self {
        Self {
            model,
            seen_model: None,
            seen_store: store_revision,
            seen_registry: registry_revision,
            unresolved: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Map model entries to enabled ticket ids, dropping repeats.
    fn resolve(&self, selection: &Selection<K, V>) -> Resolution<K, P::Item> {
        let items = self.model.with(<M as ModelShape<P::Item>>::items);
        let mut out = Resolution {
            target: Vec::with_capacity(items.len()),
            resolvable: Vec::with_capacity(items.len()),
            unresolved: Vec::new(),
        };
        for item in items {
            match selection
                .registry()
                .find(|t| !t.disabled && P::matches(t, &item))
            {
                Some(ticket) if !out.target.contains(&ticket.id) => {
                    out.target.push(ticket.id.clone());
                    out.resolvable.push(item);
                }
                Some(_) => {}
                None => {
                    trace!("model entry names no enabled ticket; skipped");
                    out.unresolved.push(item);
                }
            }
        }
        out
    }

    /// Write the projected selection unless it already equals `expected`.
    fn write_unless(&self, selection: &Selection<K, V>, expected: &[P::Item]) {
        let projected = project::<K, V, P>(selection);
        if projected != expected {
            trace!(
                selected = projected.len(),
                entries = expected.len(),
                "write selection to model"
            );
            self.model.set(M::from_items(projected));
        }
    }
}

impl<K, V, P, M> Synchronize<K, V> for Binding<K, V, P, M>
where
    K: TicketKey,
    P: Projection<K, V>,
    M: ModelShape<P::Item>,
{
    fn sync(&mut self, selection: &mut Selection<K, V>) {
        let model_changed = self.seen_model != Some(self.model.version());
        let store_changed = selection.revision() != self.seen_store;
        let registry_changed = selection.registry_revision() != self.seen_registry;

        let resolution = self.resolve(selection);
        if model_changed {
            selection.reconcile(&resolution.target);
            self.write_unless(selection, &resolution.resolvable);
        } else if registry_changed {
            // Entries naming tickets that were missing or disabled last time.
            let late: Vec<K> = resolution
                .target
                .iter()
                .zip(&resolution.resolvable)
                .filter(|(_, item)| self.unresolved.contains(item))
                .map(|(id, _)| id.clone())
                .collect();
            for id in &late {
                trace!(id = ?id, "model entry resolved late");
                selection.select(id);
            }
            if late.is_empty() && store_changed {
                let items = self.model.with(<M as ModelShape<P::Item>>::items);
                self.write_unless(selection, &items);
            } else {
                // Only unresolved entries may differ from the projection.
                self.write_unless(selection, &resolution.resolvable);
            }
        } else if store_changed {
            let items = self.model.with(<M as ModelShape<P::Item>>::items);
            self.write_unless(selection, &items);
        }

        self.unresolved = self.resolve(selection).unresolved;
        self.seen_model = Some(self.model.version());
        self.seen_store = selection.revision();
        self.seen_registry = selection.registry_revision();
    }
}

fn project<K, V, P>(selection: &Selection<K, V>) -> Vec<P::Item>
where
    K: TicketKey,
    P: Projection<K, V>,
{
    selection.selected_items().map(P::project).collect()
}
