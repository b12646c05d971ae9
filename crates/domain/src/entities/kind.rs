//! Entity kinds as seen by the naming rules.

use serde::{Deserialize, Serialize};

use crate::entities::attachment::NameAttachment;
use crate::value_objects::{LandmarkIdentity, Nickname};

/// Kind of an in-world entity, with whatever identity state naming needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    /// Ephemeral creature; named per instance only.
    Creature,
    /// Persistent landmark; named through its durable id.
    Landmark { identity: LandmarkIdentity },
    /// Anything else. Not nameable.
    Prop,
}

impl EntityKind {
    pub fn landmark(identity: LandmarkIdentity) -> Self {
        EntityKind::Landmark { identity }
    }

    pub fn is_nameable(&self) -> bool {
        !matches!(self, EntityKind::Prop)
    }

    /// The attachment a first rename creates on an entity of this kind.
    ///
    /// Returns `None` for kinds that cannot be named.
    pub fn new_attachment(&self, name: Nickname) -> Option<NameAttachment> {
        match self {
            EntityKind::Creature => Some(NameAttachment::ephemeral(name)),
            EntityKind::Landmark { identity } => {
                Some(NameAttachment::identifier_backed(name, identity))
            }
            EntityKind::Prop => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Creature => write!(f, "creature"),
            EntityKind::Landmark { .. } => write!(f, "landmark"),
            EntityKind::Prop => write!(f, "prop"),
        }
    }
}
