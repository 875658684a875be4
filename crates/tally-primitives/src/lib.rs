//! Closed category enumerations for positional counting.
//!
//! A [`Category`] is one value of a small, fixed enumeration whose ordinal
//! doubles as an array index. The [`category_enum!`] macro declares such an
//! enumeration in one place so its ordinals, names, and registry order can
//! never drift apart.

#[macro_use]
mod macros;

mod storage;


use std::{fmt::Debug, hash::Hash};

pub use storage::StorageType;

///
/// Category
///
/// One value of a closed, ordered enumeration.
///
/// `ALL` lists every value in ordinal order, so that for every position `i`,
/// `ALL[i].ordinal() == i`. Counter sets rely on that ordering and reject
/// sequences that break it.
///

pub trait Category: Copy + Debug + Eq + Hash + 'static {
    /// Every value of the enumeration in ordinal order.
    const ALL: &'static [Self];

    /// Zero-based position of this value within its enumeration.
    fn ordinal(self) -> usize;

    /// Stable display name.
    fn name(self) -> &'static str;

    /// Number of values in the enumeration.
    #[must_use]
    fn cardinality() -> usize {
        Self::ALL.len()
    }

    /// Look up a value by its display name.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}
