// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named, typed context provision for nested consumers.
//!
//! A [`ContextScope`] is an explicit stand-in for ambient, tree-scoped
//! injection: a provider creates a child scope, provides a context object under
//! a [`ContextKey`], and hands the scope to its descendants. Descendants look
//! the object up by key; the nearest ancestor providing the key wins.
//!
//! ```
//! use core::cell::RefCell;
//! use understory_selection::{ContextKey, ContextScope, Group, SelectionOptions};
//!
//! const TABS: ContextKey<RefCell<Group<u32, &'static str>>> = ContextKey::new("v0:tabs");
//!
//! let root = ContextScope::root();
//! let provider = root.child();
//! provider.provide(&TABS, RefCell::new(Group::new(SelectionOptions::default())));
//!
//! let leaf = provider.child().child();
//! let tabs = leaf.require(&TABS).unwrap();
//! assert!(tabs.borrow().is_empty());
//! assert!(root.inject(&TABS).is_none());
//! ```

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::Any;
use core::cell::RefCell;
use core::marker::PhantomData;

use tracing::trace;

use crate::error::Error;

/// Typed name under which a context object is provided.
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    /// Create a key. Names are namespaced by convention, e.g. `"v0:tabs"`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The key's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for ContextKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ContextKey<T> {}

impl<T> core::fmt::Debug for ContextKey<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ContextKey").field(&self.name).finish()
    }
}

/// A node in the provider chain. Cloning shares the node.
#[derive(Clone)]
pub struct ContextScope {
    inner: Rc<ScopeNode>,
}

struct ScopeNode {
    parent: Option<ContextScope>,
    entries: RefCell<BTreeMap<&'static str, Rc<dyn Any>>>,
}

impl core::fmt::Debug for ContextScope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names: Vec<&'static str> = self.inner.entries.borrow().keys().copied().collect();
        f.debug_struct("ContextScope")
            .field("provides", &names)
            .field("depth", &self.depth())
            .finish()
    }
}

impl ContextScope {
    /// Create a scope with no parent.
    pub fn root() -> Self {
        Self {
            inner: Rc::new(ScopeNode {
                parent: None,
                entries: RefCell::new(BTreeMap::new()),
            }),
        }
    }

    /// Create a child scope that falls back to `self` for lookups.
    pub fn child(&self) -> Self {
        Self {
            inner: Rc::new(ScopeNode {
                parent: Some(self.clone()),
                entries: RefCell::new(BTreeMap::new()),
            }),
        }
    }

    /// Number of ancestors.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cur = self.inner.parent.as_ref();
        while let Some(scope) = cur {
            depth += 1;
            cur = scope.inner.parent.as_ref();
        }
        depth
    }

    /// Provide `value` under `key` in this scope, returning the shared object.
    ///
    /// Replaces a previous object provided under the same name in this scope.
    pub fn provide<T: 'static>(&self, key: &ContextKey<T>, value: T) -> Rc<T> {
        let value = Rc::new(value);
        self.provide_shared(key, Rc::clone(&value));
        value
    }

    /// Provide an already shared object under `key`.
    pub fn provide_shared<T: 'static>(&self, key: &ContextKey<T>, value: Rc<T>) {
        trace!(name = key.name, "provide context");
        self.inner.entries.borrow_mut().insert(key.name, value);
    }

    /// Find the nearest object provided under `key`, in this scope or an ancestor.
    ///
    /// An entry with the right name but a different type is skipped.
    pub fn inject<T: 'static>(&self, key: &ContextKey<T>) -> Option<Rc<T>> {
        let mut cur = Some(self);
        while let Some(scope) = cur {
            let found = scope
                .inner
                .entries
                .borrow()
                .get(key.name)
                .cloned()
                .and_then(|any| any.downcast::<T>().ok());
            if found.is_some() {
                return found;
            }
            cur = scope.inner.parent.as_ref();
        }
        None
    }

    /// Like [`inject`](Self::inject), but a missing provider is an error.
    pub fn require<T: 'static>(&self, key: &ContextKey<T>) -> Result<Rc<T>, Error> {
        self.inject(key).ok_or(Error::MissingContext(key.name))
    }
}
