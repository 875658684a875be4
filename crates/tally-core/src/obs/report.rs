use crate::{
    aggregate::KeyedCounterAggregate,
    counter::{CounterSet, Counters},
    error::CounterError,
    factory::CounterFactory,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt::Display, hash::Hash};
use tally_primitives::Category;

///
/// CounterReport
///
/// Point-in-time snapshot of one counter set, in ordinal order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CounterReport {
    pub counts: Vec<CounterEntry>,
}

impl CounterReport {
    /// Look up a counter by category name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.counts
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }
}

impl<E: Category> From<&CounterSet<E>> for CounterReport {
    fn from(counts: &CounterSet<E>) -> Self {
        Self {
            counts: counts
                .iter()
                .map(|(category, value)| CounterEntry {
                    name: category.name().to_string(),
                    value,
                })
                .collect(),
        }
    }
}

///
/// CounterEntry
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CounterEntry {
    pub name: String,
    pub value: i64,
}

///
/// AggregateReport
///
/// Snapshot of a keyed aggregate: every entry plus the element-wise total.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AggregateReport {
    pub entries: BTreeMap<String, CounterReport>,
    pub total: CounterReport,
}

impl<K, E, C, F> KeyedCounterAggregate<K, E, C, F>
where
    K: Eq + Hash,
    E: Category,
    C: Counters<E>,
    F: CounterFactory<C>,
{
    /// Snapshot every entry, labelling keys with their `Display` form.
    pub fn report(&self) -> Result<AggregateReport, CounterError>
    where
        K: Display,
    {
        self.report_with(ToString::to_string)
    }

    /// Snapshot every entry, labelling keys with `label`.
    ///
    /// Keys that render to the same label are merged element-wise into one
    /// entry, so the entries always add up to `total`.
    pub fn report_with(
        &self,
        label: impl Fn(&K) -> String,
    ) -> Result<AggregateReport, CounterError> {
        let total = self.sum()?;

        let mut merged: BTreeMap<String, C> = BTreeMap::new();
        for (key, counts) in self.iter() {
            merged
                .entry(label(key))
                .or_insert_with(|| self.factory().new_instance())
                .counters_mut()
                .add_counters(counts.counters())?;
        }

        let entries: BTreeMap<_, _> = merged
            .iter()
            .map(|(label, counts)| (label.clone(), CounterReport::from(counts.counters())))
            .collect();

        debug!("built counter report over {} keys", entries.len());

        Ok(AggregateReport {
            entries,
            total: CounterReport::from(total.counters()),
        })
    }
}
