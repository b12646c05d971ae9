//! Entity modules wrapping domain naming operations.

pub mod nickname;
pub mod world;

pub use nickname::{AssignResult, Nicknames};
pub use world::{EntityInstance, WorldState};
