//! Nicknames engine library.
//!
//! Host-side integration of the nickname system.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping domain naming operations
//! - `use_cases/` - Command and lifecycle hooks orchestrating entities
//! - `infrastructure/` - Console, configuration, and save-data persistence
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end scenarios driven through `App`.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
