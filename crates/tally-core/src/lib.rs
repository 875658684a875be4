//! Core counting primitives: fixed-cardinality counter sets indexed by
//! category ordinal, the factory contract that produces them, and a keyed
//! aggregate that sums them.
#![warn(unreachable_pub)]

pub mod aggregate;
pub mod counter;
pub mod error;
pub mod factory;
pub mod obs;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::CounterError;

///
/// Prelude
///
/// Counting vocabulary only; reports stay under `obs`.
///

pub mod prelude {
    pub use crate::{
        aggregate::{CounterMap, KeyedCounterAggregate},
        counter::{CounterSet, Counters, StorageTypeCounts, StorageTypeCountsFactory},
        error::CounterError,
        factory::{CounterFactory, EnumCounterFactory},
    };
    pub use tally_primitives::{Category, StorageType};
}
