// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options for a [`Selection`](crate::Selection).
//!
//! Options are fixed at construction. They deserialize from host
//! configuration using the host framework's spelling:
//!
//! ```
//! use understory_selection::{Mandatory, SelectionOptions};
//!
//! let opts: SelectionOptions =
//!     serde_json::from_str(r#"{ "multiple": true, "mandatory": "force" }"#).unwrap();
//! assert!(opts.multiple);
//! assert_eq!(opts.mandatory, Mandatory::Force);
//! assert!(!opts.return_object);
//! ```

use serde::{Deserialize, Serialize};

/// Policy for keeping at least one ticket selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MandatoryRepr", into = "MandatoryRepr")]
pub enum Mandatory {
    /// The selection may become empty.
    #[default]
    Off,
    /// Unselecting the last selected ticket is rejected as a no-op.
    ///
    /// Nothing is selected automatically at registration time. When the last
    /// selected ticket leaves (unregistered or disabled) a fallback is chosen.
    Required,
    /// The selection heals itself.
    ///
    /// The first enabled ticket is selected as soon as one registers, and
    /// unselecting the last selected ticket moves the selection to a fallback.
    Force,
}

impl Mandatory {
    /// True for [`Required`](Self::Required) and [`Force`](Self::Force).
    pub fn is_on(self) -> bool {
        !matches!(self, Self::Off)
    }
}

#[derive(Copy, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum MandatoryRepr {
    Flag(bool),
    Force(ForceTag),
}

#[derive(Copy, Clone, Serialize, Deserialize)]
enum ForceTag {
    #[serde(rename = "force")]
    Force,
}

impl From<MandatoryRepr> for Mandatory {
    fn from(repr: MandatoryRepr) -> Self {
        match repr {
            MandatoryRepr::Flag(false) => Self::Off,
            MandatoryRepr::Flag(true) => Self::Required,
            MandatoryRepr::Force(ForceTag::Force) => Self::Force,
        }
    }
}

impl From<Mandatory> for MandatoryRepr {
    fn from(m: Mandatory) -> Self {
        match m {
            Mandatory::Off => Self::Flag(false),
            Mandatory::Required => Self::Flag(true),
            Mandatory::Force => Self::Force(ForceTag::Force),
        }
    }
}

/// Options for a [`Selection`](crate::Selection).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionOptions {
    /// Allow more than one selected ticket.
    pub multiple: bool,
    /// Mandatory-selection policy.
    pub mandatory: Mandatory,
    /// Bound models hold ticket objects instead of ticket values.
    pub return_object: bool,
}

impl SelectionOptions {
    /// Single-selection options with the given mandatory policy.
    pub fn single(mandatory: Mandatory) -> Self {
        Self {
            multiple: false,
            mandatory,
            return_object: false,
        }
    }

    /// Multiple-selection options with the given mandatory policy.
    pub fn multiple(mandatory: Mandatory) -> Self {
        Self {
            multiple: true,
            mandatory,
            return_object: false,
        }
    }

    /// Set whether bound models hold ticket objects.
    #[must_use]
    pub fn with_return_object(mut self, return_object: bool) -> Self {
        self.return_object = return_object;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandatory_uses_host_literals() {
        let parse = |s: &str| serde_json::from_str::<Mandatory>(s).unwrap();
        assert_eq!(parse("false"), Mandatory::Off);
        assert_eq!(parse("true"), Mandatory::Required);
        assert_eq!(parse("\"force\""), Mandatory::Force);
        assert!(serde_json::from_str::<Mandatory>("\"always\"").is_err());
    }

    #[test]
    fn mandatory_serializes_back_to_literals() {
        assert_eq!(serde_json::to_string(&Mandatory::Off).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Mandatory::Force).unwrap(), "\"force\"");
    }

    #[test]
    fn options_default_missing_fields() {
        let opts: SelectionOptions = serde_json::from_str(r#"{ "returnObject": true }"#).unwrap();
        assert_eq!(
            opts,
            SelectionOptions::single(Mandatory::Off).with_return_object(true)
        );
    }
}
