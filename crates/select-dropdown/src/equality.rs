//! Structural equality of option models.
//!
//! Two models are equal when they have the same groups in the same order and
//! each group holds the same `(value, text, disabled)` entries in the same
//! order. Reordering is a change: the comparison is over sequences, never
//! sets. The controller uses this as a cheap gate to keep the previous model
//! when a configuration pass rebuilds an identical one.
//!
//! `IndexMap`'s own `PartialEq` ignores ordering, so groups are compared
//! entry by entry here instead.

use crate::options::{OptionGroup, OptionModel};

/// Order-sensitive structural comparison of two models.
pub fn models_equal(a: &OptionModel, b: &OptionModel) -> bool {
    a.groups().len() == b.groups().len()
        && a.groups()
            .iter()
            .zip(b.groups())
            .all(|(ga, gb)| groups_equal(ga, gb))
}

/// Order-sensitive structural comparison of two groups.
pub fn groups_equal(a: &OptionGroup, b: &OptionGroup) -> bool {
    a.label() == b.label() && a.len() == b.len() && a.options().eq(b.options())
}

impl PartialEq for OptionGroup {
    fn eq(&self, other: &Self) -> bool {
        groups_equal(self, other)
    }
}

impl Eq for OptionGroup {}

impl PartialEq for OptionModel {
    fn eq(&self, other: &Self) -> bool {
        models_equal(self, other)
    }
}

impl Eq for OptionModel {}
