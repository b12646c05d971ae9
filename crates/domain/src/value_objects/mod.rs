//! Value objects for the naming domain.

mod landmark_model;
mod names;

pub use landmark_model::{LandmarkIdentity, LandmarkModel, PlacementRecord};
pub use names::Nickname;
