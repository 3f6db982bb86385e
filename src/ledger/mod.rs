//! Ledger domain model and write-through persistence mediation.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{Entry, EntryKind};
pub use ledger::{Ledger, OverBudget, CEILING_KEY, ENTRIES_KEY};
