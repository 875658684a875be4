mod storage;


use crate::error::CounterError;
use std::{fmt, sync::Arc};
use tally_primitives::Category;

pub use storage::{StorageTypeCounts, StorageTypeCountsFactory};

///
/// CounterSet
///
/// One signed 64-bit counter per category of a closed enumeration.
///
/// Counters are stored densely and addressed by ordinal, so every access is
/// a single slice index. `values[i]` always belongs to `categories[i]`, and
/// both slices have the same length for the lifetime of the set.
///
/// All arithmetic wraps on overflow.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CounterSet<E: Category> {
    categories: Arc<[E]>,
    values: Box<[i64]>,
}

impl<E: Category> CounterSet<E> {
    /// Build a zeroed counter set for `categories`.
    ///
    /// Every element must sit at the position given by its own ordinal.
    pub fn new(categories: &[E]) -> Result<Self, CounterError> {
        let categories = validate_ordering(categories)?;

        Ok(Self::from_validated(categories))
    }

    /// Build a zeroed counter set covering every value of `E`.
    pub fn try_for_enum() -> Result<Self, CounterError> {
        Self::new(E::ALL)
    }

    // Caller guarantees `categories` already passed `validate_ordering`.
    pub(crate) fn from_validated(categories: Arc<[E]>) -> Self {
        let values = vec![0; categories.len()].into_boxed_slice();

        Self { categories, values }
    }

    /// Return the counter for `category`.
    ///
    /// # Panics
    ///
    /// Panics if `category` comes from a larger enumeration than the one this
    /// set was built for.
    #[must_use]
    pub fn get(&self, category: E) -> i64 {
        self.values[category.ordinal()]
    }

    /// Overwrite the counter for `category`.
    pub fn set(&mut self, category: E, value: i64) {
        self.values[category.ordinal()] = value;
    }

    /// Add `value` to the counter for `category`.
    pub fn add(&mut self, category: E, value: i64) {
        let slot = &mut self.values[category.ordinal()];
        *slot = slot.wrapping_add(value);
    }

    /// Subtract `value` from the counter for `category`.
    pub fn subtract(&mut self, category: E, value: i64) {
        let slot = &mut self.values[category.ordinal()];
        *slot = slot.wrapping_sub(value);
    }

    /// Flip the sign of every counter in place.
    pub fn negate(&mut self) {
        for value in &mut *self.values {
            *value = value.wrapping_neg();
        }
    }

    /// Add every counter of `other` into this set.
    ///
    /// Fails without modifying `self` if the two sets differ in shape.
    pub fn add_counters(&mut self, other: &Self) -> Result<(), CounterError> {
        self.ensure_same_shape(other)?;
        for (value, delta) in self.values.iter_mut().zip(other.values.iter()) {
            *value = value.wrapping_add(*delta);
        }

        Ok(())
    }

    /// Subtract every counter of `other` from this set.
    ///
    /// Fails without modifying `self` if the two sets differ in shape.
    pub fn subtract_counters(&mut self, other: &Self) -> Result<(), CounterError> {
        self.ensure_same_shape(other)?;
        for (value, delta) in self.values.iter_mut().zip(other.values.iter()) {
            *value = value.wrapping_sub(*delta);
        }

        Ok(())
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.values.fill(0);
    }

    /// Returns `true` if every counter is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }

    /// Number of categories (and counters).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the enumeration has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Categories in ordinal order.
    #[must_use]
    pub fn categories(&self) -> &[E] {
        &self.categories
    }

    /// Raw counters in ordinal order.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Iterate `(category, value)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (E, i64)> + '_ {
        self.categories
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    fn ensure_same_shape(&self, other: &Self) -> Result<(), CounterError> {
        if self.values.len() == other.values.len() {
            Ok(())
        } else {
            Err(CounterError::MismatchedCounterShape {
                expected: self.values.len(),
                actual: other.values.len(),
            })
        }
    }
}

impl<E: Category> fmt::Display for CounterSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (category, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={value}", category.name())?;
        }

        Ok(())
    }
}

///
/// Counters
///
/// Access to the [`CounterSet`] behind a counter type. Implemented by
/// `CounterSet` itself and by any domain newtype wrapping one, which lets the
/// keyed aggregate store either without knowing which.
///

pub trait Counters<E: Category> {
    fn counters(&self) -> &CounterSet<E>;

    fn counters_mut(&mut self) -> &mut CounterSet<E>;
}

impl<E: Category> Counters<E> for CounterSet<E> {
    fn counters(&self) -> &Self {
        self
    }

    fn counters_mut(&mut self) -> &mut Self {
        self
    }
}

/// Check `categories[i].ordinal() == i` for every position.
pub(crate) fn validate_ordering<E: Category>(categories: &[E]) -> Result<Arc<[E]>, CounterError> {
    if let Some((position, category)) = categories
        .iter()
        .enumerate()
        .find(|(i, c)| c.ordinal() != *i)
    {
        return Err(CounterError::InvalidCategoryOrdering {
            position,
            ordinal: category.ordinal(),
        });
    }

    Ok(Arc::from(categories))
}
