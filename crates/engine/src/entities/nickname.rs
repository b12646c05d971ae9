//! Nickname entity module.
//!
//! Attaches, renames, clears, and rehydrates name attachments on entity
//! instances, keeping the naming store in step for identifier-backed names.

use std::sync::Arc;

use nicknames_domain::{
    DurableId, EntityKind, InstanceId, MirrorOutcome, NameAttachment, NamingStore, Nickname,
};

use crate::entities::world::{EntityInstance, WorldState};
use crate::infrastructure::config::DestroyPolicy;
use crate::infrastructure::persistence::{read_actor_data, CompoundPiece};
use crate::infrastructure::ports::ConsolePort;

/// Outcome of assigning a name to an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignResult {
    /// True when an existing attachment was renamed in place.
    pub renamed_in_place: bool,
    pub store: MirrorOutcome,
}

/// Nickname entity - per-instance naming operations.
pub struct Nicknames {
    console: Arc<dyn ConsolePort>,
    destroy_policy: DestroyPolicy,
}

impl Nicknames {
    pub fn new(console: Arc<dyn ConsolePort>, destroy_policy: DestroyPolicy) -> Self {
        Self {
            console,
            destroy_policy,
        }
    }

    /// Set an instance's name, creating the attachment on first use.
    ///
    /// Returns `None` when the instance's kind is not nameable.
    pub fn assign(
        &self,
        store: &mut NamingStore,
        instance: &mut EntityInstance,
        name: Nickname,
    ) -> Option<AssignResult> {
        let renamed_in_place = match instance.nickname_mut() {
            Some(attachment) => {
                attachment.rename(name);
                true
            }
            None => {
                let attachment = instance.kind().new_attachment(name)?;
                instance.attach(attachment);
                false
            }
        };

        let attachment = instance.nickname()?;
        let outcome = store.mirror(attachment);
        match &outcome {
            MirrorOutcome::Stored(durable_id) => {
                tracing::debug!(
                    instance_id = %instance.id(),
                    durable_id = %durable_id,
                    "Mirrored nickname into naming store"
                );
            }
            MirrorOutcome::Unresolved => {
                tracing::warn!(
                    instance_id = %instance.id(),
                    label = %instance.label(),
                    "Identifier-backed nickname has no durable id"
                );
                self.console.log_warning(&format!(
                    "{} cannot update model due to missing durable id",
                    instance.label()
                ));
            }
            MirrorOutcome::NotPersistent => {}
        }

        Some(AssignResult {
            renamed_in_place,
            store: outcome,
        })
    }

    /// Remove an instance's attachment. An identifier-backed attachment also
    /// loses its naming store entry, whatever the destroy policy.
    pub fn clear(
        &self,
        store: &mut NamingStore,
        instance: &mut EntityInstance,
    ) -> Option<NameAttachment> {
        let attachment = instance.detach()?;
        if let Some(removed) = store.forget(&attachment) {
            tracing::debug!(
                instance_id = %instance.id(),
                name = %removed,
                "Removed nickname from naming store"
            );
        }
        Some(attachment)
    }

    /// Bring every other live instance of `durable_id` in line with the
    /// instance `source` was just renamed or cleared to. `None` clears.
    ///
    /// The store is not touched; the caller already updated it.
    pub fn sync_shared(
        &self,
        world: &mut WorldState,
        source: InstanceId,
        durable_id: &DurableId,
        name: Option<&Nickname>,
    ) -> usize {
        let mut synced = 0;
        for instance in world
            .sharing_durable_id_mut(durable_id)
            .filter(|instance| instance.id() != source)
        {
            match name {
                Some(name) => {
                    if let Some(existing) = instance.nickname_mut() {
                        existing.rename(name.clone());
                    } else if let Some(attachment) = instance.kind().new_attachment(name.clone()) {
                        instance.attach(attachment);
                    } else {
                        continue;
                    }
                }
                None => {
                    if instance.detach().is_none() {
                        continue;
                    }
                }
            }
            synced += 1;
        }
        if synced > 0 {
            tracing::debug!(
                durable_id = %durable_id,
                synced,
                "Synced nickname across live instances"
            );
        }
        synced
    }

    /// Rehydration hook for an instance whose durable id is already known.
    ///
    /// Returns true when a stored name was attached.
    pub fn rehydrate(
        &self,
        store: &NamingStore,
        instance: &mut EntityInstance,
        durable_id: &DurableId,
    ) -> bool {
        let Some(attachment) = store.rehydrate(durable_id) else {
            return false;
        };
        match instance.nickname_mut() {
            Some(existing) => existing.rename(attachment.name().clone()),
            None => instance.attach(attachment),
        }
        tracing::debug!(
            instance_id = %instance.id(),
            durable_id = %durable_id,
            "Rehydrated nickname"
        );
        true
    }

    /// Materialization hook: resolves a landmark's durable id from its
    /// identity state and rehydrates it. Other kinds are left untouched.
    pub fn on_materialized(&self, store: &NamingStore, instance: &mut EntityInstance) -> bool {
        match instance.durable_id() {
            Some(id) => self.rehydrate(store, instance, &id),
            None => false,
        }
    }

    /// Restore a creature's name from its per-actor save data.
    pub fn restore_actor_data(&self, instance: &mut EntityInstance, data: &CompoundPiece) -> bool {
        if !matches!(instance.kind(), EntityKind::Creature) {
            return false;
        }
        match read_actor_data(data) {
            Some(attachment) => {
                instance.attach(attachment);
                true
            }
            None => false,
        }
    }

    /// Destruction hook. Under [`DestroyPolicy::Remove`] the naming store
    /// entry of an identifier-backed attachment goes with the instance.
    pub fn on_destroyed(
        &self,
        store: &mut NamingStore,
        instance: &EntityInstance,
    ) -> Option<Nickname> {
        match (self.destroy_policy, instance.nickname()) {
            (DestroyPolicy::Remove, Some(attachment)) => {
                let removed = store.forget(attachment);
                if removed.is_some() {
                    tracing::debug!(
                        instance_id = %instance.id(),
                        "Removed nickname of destroyed instance"
                    );
                }
                removed
            }
            _ => None,
        }
    }

    /// Label override for a targeted instance: its non-empty nickname.
    pub fn label_override(instance: &EntityInstance) -> Option<&str> {
        instance.nickname().and_then(NameAttachment::label)
    }
}
