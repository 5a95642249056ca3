// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the registry, the selection engine, and its wrappers.
//!
//! Only programmer errors surface here. Interaction-time races (unknown ids,
//! disabled tickets, mandatory conflicts, unresolvable model entries) are
//! resolved silently by the engine and never produce an [`Error`].

use alloc::string::String;

use thiserror::Error;

/// Errors reported at construction, registration, or binding time.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied ticket id is already present in the registry.
    #[error("ticket id {0} is already registered")]
    DuplicateId(String),

    /// An invalid combination of options was given to a constructor or binding.
    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),

    /// No ancestor scope provides the requested context.
    #[error("no context provided for `{0}`")]
    MissingContext(&'static str),

    /// The selection was disposed and no longer accepts registrations or bindings.
    #[error("selection has been disposed")]
    Disposed,
}
