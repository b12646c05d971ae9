//! Durable identity resolution for identifier-backed entities.

use crate::ids::DurableId;
use crate::value_objects::LandmarkIdentity;

/// Derive the durable id of a landmark from its current runtime state.
///
/// Tried in order:
/// 1. the instance-local id,
/// 2. the id of the placement site the landmark occupies,
/// 3. nothing: the landmark cannot be persisted by name.
///
/// Empty ids count as absent at either step.
pub fn resolve_durable_id(identity: &LandmarkIdentity) -> Option<DurableId> {
    if let Some(id) = identity.local_id.as_deref().and_then(non_empty) {
        return Some(id);
    }
    identity
        .placement
        .as_ref()
        .and_then(|placement| placement.site_id.as_deref())
        .and_then(non_empty)
}

fn non_empty(raw: &str) -> Option<DurableId> {
    DurableId::new(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{LandmarkModel, PlacementRecord};

    #[test]
    fn local_id_wins_over_placement() {
        let identity = LandmarkIdentity::default()
            .with_local_id("gordo-3")
            .with_placement(PlacementRecord::new("site-7"));
        assert_eq!(
            resolve_durable_id(&identity),
            Some(DurableId::new("gordo-3").unwrap())
        );
    }

    #[test]
    fn falls_back_to_placement_site() {
        let identity = LandmarkIdentity::default().with_placement(PlacementRecord::new("site-7"));
        assert_eq!(
            resolve_durable_id(&identity),
            Some(DurableId::new("site-7").unwrap())
        );
    }

    #[test]
    fn empty_local_id_falls_through() {
        let identity = LandmarkIdentity::default()
            .with_local_id("")
            .with_placement(PlacementRecord::new("site-7"));
        assert_eq!(
            resolve_durable_id(&identity).map(|id| id.to_string()),
            Some("site-7".to_string())
        );
    }

    #[test]
    fn unresolvable_without_ids() {
        assert_eq!(resolve_durable_id(&LandmarkIdentity::default()), None);

        let identity = LandmarkIdentity::default().with_placement(PlacementRecord::unassigned());
        assert_eq!(resolve_durable_id(&identity), None);
    }

    #[test]
    fn both_model_shapes_resolve_the_same_way() {
        let native = LandmarkModel::Native { id: "x-1".into() };
        let placed = LandmarkModel::Placed {
            site_id: "x-1".into(),
        };
        assert_eq!(
            resolve_durable_id(&native.identity()),
            resolve_durable_id(&placed.identity())
        );
    }
}
