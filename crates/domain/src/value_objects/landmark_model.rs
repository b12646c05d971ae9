//! Model data a landmark materializes from.
//!
//! A landmark arrives either from its own native model, which carries the
//! landmark's id, or from a placed-gadget model whose identity lives on the
//! placement site it occupies.

use serde::{Deserialize, Serialize};

/// Record of the site a gadget-backed landmark was placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub site_id: Option<String>,
}

impl PlacementRecord {
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: Some(site_id.into()),
        }
    }

    /// A placement whose site carries no id.
    pub fn unassigned() -> Self {
        Self { site_id: None }
    }
}

/// Runtime identity state of a landmark instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkIdentity {
    /// Instance-local identifier, set when the landmark has its own model.
    pub local_id: Option<String>,
    /// Placement record, set when the landmark sits on a placement site.
    pub placement: Option<PlacementRecord>,
}

impl LandmarkIdentity {
    pub fn with_local_id(mut self, id: impl Into<String>) -> Self {
        self.local_id = Some(id.into());
        self
    }

    pub fn with_placement(mut self, placement: PlacementRecord) -> Self {
        self.placement = Some(placement);
        self
    }
}

/// The two shapes of model data a landmark can be materialized from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LandmarkModel {
    /// Native landmark model carrying the landmark's own id.
    Native { id: String },
    /// Gadget model placed on a site; identity comes from the site.
    Placed { site_id: String },
}

impl LandmarkModel {
    /// Identity state a landmark instance has once this model is applied.
    pub fn identity(&self) -> LandmarkIdentity {
        match self {
            LandmarkModel::Native { id } => LandmarkIdentity::default().with_local_id(id.clone()),
            LandmarkModel::Placed { site_id } => {
                LandmarkIdentity::default().with_placement(PlacementRecord::new(site_id.clone()))
            }
        }
    }
}
