//! Observability: serializable snapshots of counter sets and aggregates for
//! periodic metrics emission. Snapshots are copies; building one never
//! mutates the source counters.

mod report;

#[cfg(test)]
mod tests;

pub use report::{AggregateReport, CounterEntry, CounterReport};
