
use crate::{
    counter::{CounterSet, Counters},
    error::CounterError,
    factory::{CounterFactory, EnumCounterFactory},
};
use log::trace;
use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map::Entry},
    fmt,
    hash::Hash,
    marker::PhantomData,
};
use tally_primitives::Category;

///
/// CounterMap
///
/// Keyed aggregate of plain [`CounterSet`]s.
///

pub type CounterMap<K, E> = KeyedCounterAggregate<K, E, CounterSet<E>, EnumCounterFactory<E>>;

impl<K, E> CounterMap<K, E>
where
    K: Eq + Hash,
    E: Category,
{
    /// Build an empty map whose counter sets cover every value of `E`.
    pub fn try_for_enum() -> Result<Self, CounterError> {
        Ok(Self::new(EnumCounterFactory::try_for_enum()?))
    }
}

///
/// KeyedCounterAggregate
///
/// One counter set per key, created on first access through the factory.
///
/// Use `Option<K>` as the key type when an absent key must be tracked; `None`
/// is then an ordinary, distinct key.
///
/// Not synchronised. Callers sharing an aggregate across threads must guard
/// it as a whole, including `get_counts`, which inserts.
///

pub struct KeyedCounterAggregate<K, E, C, F> {
    factory: F,
    counts: HashMap<K, C>,
    _marker: PhantomData<fn() -> E>,
}

impl<K, E, C, F> KeyedCounterAggregate<K, E, C, F>
where
    K: Eq + Hash,
    E: Category,
    C: Counters<E>,
    F: CounterFactory<C>,
{
    /// Build an empty aggregate.
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            counts: HashMap::new(),
            _marker: PhantomData,
        }
    }

    /// Return the counters for `key`, creating zeroed ones on first access.
    pub fn get_counts(&mut self, key: K) -> &mut C {
        let existing = self.counts.len();

        match self.counts.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!("creating counters for key #{}", existing + 1);
                entry.insert(self.factory.new_instance())
            }
        }
    }

    /// Return the counters for `key` without creating them.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&C>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(key)
    }

    /// Returns `true` if counters exist for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Element-wise total of every stored counter set, as a new instance.
    pub fn sum(&self) -> Result<C, CounterError> {
        let mut sum = self.factory.new_instance();
        for counts in self.counts.values() {
            sum.counters_mut().add_counters(counts.counters())?;
        }

        Ok(sum)
    }

    /// Total of one category across every stored counter set.
    #[must_use]
    pub fn sum_of(&self, category: E) -> i64 {
        self.counts
            .values()
            .fold(0i64, |acc, counts| acc.wrapping_add(counts.counters().get(category)))
    }
}

impl<K, E, C, F> KeyedCounterAggregate<K, E, C, F> {
    /// Number of keys with counters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no key has been accessed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Keys with counters, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// `(key, counters)` pairs, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &C)> {
        self.counts.iter()
    }

    /// The factory used for new entries and sums.
    #[must_use]
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<K, E, C, F> fmt::Debug for KeyedCounterAggregate<K, E, C, F>
where
    K: fmt::Debug,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedCounterAggregate")
            .field("counts", &self.counts)
            .finish_non_exhaustive()
    }
}

// Entries are sorted by rendered key so diagnostic output is stable.
impl<K, E, C, F> fmt::Display for KeyedCounterAggregate<K, E, C, F>
where
    K: fmt::Debug,
    E: Category,
    C: Counters<E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<(String, &C)> = self
            .counts
            .iter()
            .map(|(key, counts)| (format!("{key:?}"), counts))
            .collect();
        rendered.sort_by(|a, b| a.0.cmp(&b.0));

        f.write_str("{")?;
        for (i, (key, counts)) in rendered.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {}", counts.counters())?;
        }
        f.write_str("}")
    }
}
