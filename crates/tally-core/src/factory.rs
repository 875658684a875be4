use crate::{
    counter::{CounterSet, validate_ordering},
    error::CounterError,
};
use std::sync::Arc;
use tally_primitives::Category;

///
/// CounterFactory
///
/// Produces fresh, zeroed counter instances of one shape. Every instance a
/// factory returns must have the same category ordering and cardinality.
///
/// Any `Fn() -> C` closure is a factory.
///

pub trait CounterFactory<C> {
    fn new_instance(&self) -> C;
}

impl<C, F> CounterFactory<C> for F
where
    F: Fn() -> C,
{
    fn new_instance(&self) -> C {
        self()
    }
}

///
/// EnumCounterFactory
///
/// Factory for plain [`CounterSet`]s. The category ordering is validated once
/// here, after which every instance shares the same label sequence.
///

#[derive(Clone, Debug)]
pub struct EnumCounterFactory<E: Category> {
    categories: Arc<[E]>,
}

impl<E: Category> EnumCounterFactory<E> {
    /// Build a factory for `categories`.
    pub fn new(categories: &[E]) -> Result<Self, CounterError> {
        Ok(Self {
            categories: validate_ordering(categories)?,
        })
    }

    /// Build a factory covering every value of `E`.
    pub fn try_for_enum() -> Result<Self, CounterError> {
        Self::new(E::ALL)
    }

    /// Categories every produced instance will carry.
    #[must_use]
    pub fn categories(&self) -> &[E] {
        &self.categories
    }
}

impl<E: Category> CounterFactory<CounterSet<E>> for EnumCounterFactory<E> {
    fn new_instance(&self) -> CounterSet<E> {
        CounterSet::from_validated(Arc::clone(&self.categories))
    }
}
