//! In-memory registry of materialized entity instances.
//!
//! Stands in for the host's scene: instances are inserted when they
//! materialize and removed when destroyed. The current target is whatever
//! the player is looking at.

use std::collections::HashMap;

use nicknames_domain::{
    resolve_durable_id, AttachmentState, DurableId, EntityKind, InstanceId, NameAttachment,
};

/// One materialized entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityInstance {
    id: InstanceId,
    label: String,
    kind: EntityKind,
    nickname: Option<NameAttachment>,
}

impl EntityInstance {
    pub fn new(label: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: InstanceId::new(),
            label: label.into(),
            kind,
            nickname: None,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Default label shown when targeted.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn nickname(&self) -> Option<&NameAttachment> {
        self.nickname.as_ref()
    }

    pub fn nickname_mut(&mut self) -> Option<&mut NameAttachment> {
        self.nickname.as_mut()
    }

    pub fn attach(&mut self, attachment: NameAttachment) {
        self.nickname = Some(attachment);
    }

    pub fn detach(&mut self) -> Option<NameAttachment> {
        self.nickname.take()
    }

    pub fn attachment_state(&self) -> AttachmentState {
        AttachmentState::of(self.nickname.as_ref())
    }

    /// Durable id this instance resolves to, if it has durable identity.
    pub fn durable_id(&self) -> Option<DurableId> {
        match &self.kind {
            EntityKind::Landmark { identity } => resolve_durable_id(identity),
            EntityKind::Creature | EntityKind::Prop => None,
        }
    }
}

/// Registry of live instances plus the current target.
#[derive(Debug, Default)]
pub struct WorldState {
    instances: HashMap<InstanceId, EntityInstance>,
    order: Vec<InstanceId>,
    target: Option<InstanceId>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, instance: EntityInstance) -> InstanceId {
        let id = instance.id();
        self.order.push(id);
        self.instances.insert(id, instance);
        id
    }

    pub fn get(&self, id: InstanceId) -> Option<&EntityInstance> {
        self.instances.get(&id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut EntityInstance> {
        self.instances.get_mut(&id)
    }

    /// Remove an instance. Clears the target if it pointed at it.
    pub fn remove(&mut self, id: InstanceId) -> Option<EntityInstance> {
        let instance = self.instances.remove(&id)?;
        self.order.retain(|existing| *existing != id);
        if self.target == Some(id) {
            self.target = None;
        }
        Some(instance)
    }

    /// Remove every instance, in materialization order.
    pub fn drain(&mut self) -> Vec<EntityInstance> {
        self.target = None;
        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .filter_map(|id| self.instances.remove(&id))
            .collect()
    }

    /// Instances in materialization order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityInstance> {
        self.order.iter().filter_map(|id| self.instances.get(id))
    }

    /// Live instances that resolve to `durable_id`.
    pub fn sharing_durable_id_mut<'a>(
        &'a mut self,
        durable_id: &'a DurableId,
    ) -> impl Iterator<Item = &'a mut EntityInstance> + 'a {
        self.instances
            .values_mut()
            .filter(move |instance| instance.durable_id().as_ref() == Some(durable_id))
    }

    pub fn has_durable_id(&self, durable_id: &DurableId) -> bool {
        self.instances
            .values()
            .any(|instance| instance.durable_id().as_ref() == Some(durable_id))
    }

    /// Point the target at `id`, or at nothing. Unknown ids clear the target.
    pub fn set_target(&mut self, id: Option<InstanceId>) -> bool {
        self.target = id.filter(|id| self.instances.contains_key(id));
        self.target.is_some() == id.is_some()
    }

    pub fn target(&self) -> Option<&EntityInstance> {
        self.target.and_then(|id| self.instances.get(&id))
    }

    pub fn target_mut(&mut self) -> Option<&mut EntityInstance> {
        match self.target {
            Some(id) => self.instances.get_mut(&id),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nicknames_domain::{LandmarkModel, Nickname};

    #[test]
    fn insert_and_iterate_in_order() {
        let mut world = WorldState::new();
        let a = world.insert(EntityInstance::new("A", EntityKind::Creature));
        let b = world.insert(EntityInstance::new("B", EntityKind::Prop));

        let ids: Vec<InstanceId> = world.iter().map(EntityInstance::id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn removing_target_clears_it() {
        let mut world = WorldState::new();
        let a = world.insert(EntityInstance::new("A", EntityKind::Creature));
        assert!(world.set_target(Some(a)));
        assert!(world.target().is_some());

        world.remove(a);
        assert!(world.target().is_none());
        assert!(world.is_empty());
    }

    #[test]
    fn unknown_target_is_rejected() {
        let mut world = WorldState::new();
        assert!(!world.set_target(Some(InstanceId::new())));
        assert!(world.target().is_none());
        assert!(world.set_target(None));
    }

    #[test]
    fn drain_returns_all_in_order() {
        let mut world = WorldState::new();
        let a = world.insert(EntityInstance::new("A", EntityKind::Creature));
        let b = world.insert(EntityInstance::new("B", EntityKind::Creature));
        world.set_target(Some(b));

        let drained: Vec<InstanceId> = world.drain().iter().map(EntityInstance::id).collect();
        assert_eq!(drained, vec![a, b]);
        assert!(world.is_empty());
        assert!(world.target().is_none());
    }

    #[test]
    fn durable_id_lookup_spans_model_shapes() {
        let mut world = WorldState::new();
        let native = world.insert(EntityInstance::new(
            "Gordo",
            EntityKind::landmark(LandmarkModel::Native { id: "x-1".into() }.identity()),
        ));
        let placed = world.insert(EntityInstance::new(
            "Gadget",
            EntityKind::landmark(
                LandmarkModel::Placed {
                    site_id: "x-1".into(),
                }
                .identity(),
            ),
        ));
        world.insert(EntityInstance::new("A", EntityKind::Creature));

        let shared = DurableId::new("x-1").unwrap();
        let mut ids: Vec<InstanceId> = world
            .sharing_durable_id_mut(&shared)
            .map(|instance| instance.id())
            .collect();
        ids.sort_by_key(|id| *id.as_uuid());
        let mut expected = vec![native, placed];
        expected.sort_by_key(|id| *id.as_uuid());

        assert_eq!(ids, expected);
        assert!(world.has_durable_id(&shared));
        assert!(!world.has_durable_id(&DurableId::new("x-2").unwrap()));
    }

    #[test]
    fn attach_and_detach() {
        let mut instance = EntityInstance::new("A", EntityKind::Creature);
        assert_eq!(instance.attachment_state(), AttachmentState::Unattached);

        instance.attach(NameAttachment::ephemeral(Nickname::new("Bob")));
        assert_eq!(instance.attachment_state(), AttachmentState::Ephemeral);

        assert!(instance.detach().is_some());
        assert_eq!(instance.attachment_state(), AttachmentState::Unattached);
    }
}
