use crate::{counter::CounterSet, factory::EnumCounterFactory};
use tally_primitives::{Category, category_enum};

category_enum! {
    pub(crate) enum Abc {
        A => "A",
        B => "B",
        C => "C",
    }
}

///
/// Gapped
///
/// Hand-written category whose ordinals skip a position.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Gapped {
    First,
    Third,
}

impl Category for Gapped {
    const ALL: &'static [Self] = &[Self::First, Self::Third];

    fn ordinal(self) -> usize {
        match self {
            Self::First => 0,
            Self::Third => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::First => "FIRST",
            Self::Third => "THIRD",
        }
    }
}

pub(crate) fn abc_counters() -> CounterSet<Abc> {
    CounterSet::try_for_enum().expect("Abc is declared in ordinal order")
}

pub(crate) fn abc_factory() -> EnumCounterFactory<Abc> {
    EnumCounterFactory::try_for_enum().expect("Abc is declared in ordinal order")
}

/// Build an `Abc` counter set from `[a, b, c]`.
pub(crate) fn abc_with(values: [i64; 3]) -> CounterSet<Abc> {
    let mut counts = abc_counters();
    for (category, value) in Abc::ALL.iter().zip(values) {
        counts.set(*category, value);
    }

    counts
}
