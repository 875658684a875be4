use crate::{
    counter::{CounterSet, Counters},
    factory::CounterFactory,
};
use derive_more::{Deref, DerefMut};
use std::{fmt, sync::Arc};
use tally_primitives::{Category, StorageType};

///
/// StorageTypeCounts
///
/// Per-tier counters, e.g. bytes or replicas held on each storage type.
///

#[derive(Clone, Debug, Deref, DerefMut, Eq, PartialEq)]
pub struct StorageTypeCounts(CounterSet<StorageType>);

impl StorageTypeCounts {
    /// Zeroed counters for every storage tier.
    #[must_use]
    pub fn new() -> Self {
        // `category_enum!` emits `ALL` in ordinal order.
        Self(CounterSet::from_validated(Arc::from(StorageType::ALL)))
    }

    /// Sum of the tiers that count against quota.
    #[must_use]
    pub fn quota_total(&self) -> i64 {
        self.iter()
            .filter(|(tier, _)| tier.supports_quota())
            .fold(0i64, |acc, (_, value)| acc.wrapping_add(value))
    }

    /// Returns `true` if any quota-bearing tier exceeds its limit in `limits`.
    /// Negative limits mean "no limit".
    #[must_use]
    pub fn exceeds(&self, limits: &Self) -> bool {
        self.iter()
            .zip(limits.iter())
            .any(|((tier, used), (_, limit))| tier.supports_quota() && limit >= 0 && used > limit)
    }
}

impl Default for StorageTypeCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl Counters<StorageType> for StorageTypeCounts {
    fn counters(&self) -> &CounterSet<StorageType> {
        &self.0
    }

    fn counters_mut(&mut self) -> &mut CounterSet<StorageType> {
        &mut self.0
    }
}

impl fmt::Display for StorageTypeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

///
/// StorageTypeCountsFactory
///
/// Every instance it produces shares the factory's one tier sequence.
///

#[derive(Clone, Debug)]
pub struct StorageTypeCountsFactory {
    categories: Arc<[StorageType]>,
}

impl StorageTypeCountsFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Arc::from(StorageType::ALL),
        }
    }
}

impl Default for StorageTypeCountsFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterFactory<StorageTypeCounts> for StorageTypeCountsFactory {
    fn new_instance(&self) -> StorageTypeCounts {
        StorageTypeCounts(CounterSet::from_validated(Arc::clone(&self.categories)))
    }
}
