use thiserror::Error as ThisError;

///
/// CounterError
///
/// Precondition violations raised by counter construction and merging.
/// Wrapping arithmetic is not an error and never surfaces here.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CounterError {
    #[error("invalid category ordering: position {position} holds ordinal {ordinal}")]
    InvalidCategoryOrdering { position: usize, ordinal: usize },

    #[error("mismatched counter shape: expected {expected} categories, found {actual}")]
    MismatchedCounterShape { expected: usize, actual: usize },
}

impl CounterError {
    /// Returns `true` if the error was raised while building a counter set.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(self, Self::InvalidCategoryOrdering { .. })
    }
}
