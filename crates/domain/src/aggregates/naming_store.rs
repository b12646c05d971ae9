//! NamingStore aggregate - durable id to nickname mapping
//!
//! # Invariants
//!
//! - Keys are unique: renaming an entity replaces its entry, never duplicates it
//! - Only identifier-backed attachments with a resolved durable id reach the store
//! - The store belongs to exactly one world session; it is cleared when no world
//!   is loaded and replaced wholesale when a world loads
//!
//! The raw [`NamingStore::set`] accepts any name, including an empty one.
//! Callers that want "entry exists iff non-empty name" go through
//! [`NamingStore::mirror`] and [`NamingStore::forget`] with attachments whose
//! names were checked upstream.

use std::collections::BTreeMap;

use crate::entities::{AttachmentKind, NameAttachment};
use crate::ids::DurableId;
use crate::value_objects::Nickname;

/// Result of mirroring an attachment into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// The entry for this id was written.
    Stored(DurableId),
    /// The attachment is identifier-backed but has no durable id; nothing written.
    Unresolved,
    /// Ephemeral attachments are never stored.
    NotPersistent,
}

/// Mapping of durable entity ids to their custom names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingStore {
    names: BTreeMap<DurableId, Nickname>,
}

impl NamingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name for a durable id, returning the previous name if any.
    pub fn set(&mut self, id: DurableId, name: Nickname) -> Option<Nickname> {
        self.names.insert(id, name)
    }

    pub fn get(&self, id: &DurableId) -> Option<&Nickname> {
        self.names.get(id)
    }

    pub fn remove(&mut self, id: &DurableId) -> Option<Nickname> {
        self.names.remove(id)
    }

    pub fn contains(&self, id: &DurableId) -> bool {
        self.names.contains_key(id)
    }

    /// Drop every entry. Used when no world is loaded.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// All (id, name) pairs, ordered by id.
    pub fn entries(&self) -> impl Iterator<Item = (&DurableId, &Nickname)> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Write an attachment's name under its durable id.
    pub fn mirror(&mut self, attachment: &NameAttachment) -> MirrorOutcome {
        match attachment.kind() {
            AttachmentKind::Ephemeral => MirrorOutcome::NotPersistent,
            AttachmentKind::IdentifierBacked { durable_id: None } => MirrorOutcome::Unresolved,
            AttachmentKind::IdentifierBacked {
                durable_id: Some(id),
            } => {
                self.names.insert(id.clone(), attachment.name().clone());
                MirrorOutcome::Stored(id.clone())
            }
        }
    }

    /// Remove the entry an attachment is mirrored under, if any.
    pub fn forget(&mut self, attachment: &NameAttachment) -> Option<Nickname> {
        attachment
            .durable_id()
            .and_then(|id| self.names.remove(id))
    }

    /// Build the attachment a freshly materialized landmark should carry.
    pub fn rehydrate(&self, id: &DurableId) -> Option<NameAttachment> {
        self.names
            .get(id)
            .map(|name| NameAttachment::with_durable_id(name.clone(), id.clone()))
    }
}

impl FromIterator<(DurableId, Nickname)> for NamingStore {
    fn from_iter<T: IntoIterator<Item = (DurableId, Nickname)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
