//! Aggregates with cross-instance invariants.

pub mod naming_store;

pub use naming_store::{MirrorOutcome, NamingStore};
