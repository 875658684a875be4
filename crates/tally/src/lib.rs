//! ## Crate layout
//! - `core`: counter sets, factories, keyed aggregates, and reports.
//! - `primitives`: the `Category` contract, `category_enum!`, and the
//!   shipped `StorageType` enumeration.
//!
//! The `prelude` module exposes the counting vocabulary used by accounting
//! code.

pub use tally_core as core;
pub use tally_primitives as primitives;

pub use tally_core::{CounterError, obs};
pub use tally_primitives::category_enum;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use tally_core::prelude::*;
}
