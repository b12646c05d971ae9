//! Name attachment - the nickname carried by a single entity instance.
//!
//! An instance carries zero or one attachment. Two variants exist:
//!
//! - **Ephemeral**: the name lives only on the instance and dies with it.
//! - **IdentifierBacked**: the name is mirrored into the
//!   [`NamingStore`](crate::aggregates::NamingStore) under the durable id
//!   resolved when the attachment was created.
//!
//! Behavior differs only by matching on [`AttachmentKind`].

use crate::entities::identity::resolve_durable_id;
use crate::ids::DurableId;
use crate::value_objects::{LandmarkIdentity, Nickname};

/// Which kind of attachment an instance carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentKind {
    /// Session-only name, never written to the naming store.
    Ephemeral,
    /// Name mirrored under a durable id.
    ///
    /// `durable_id` is `None` when resolution failed at creation time; such
    /// an attachment still labels its instance but cannot be persisted.
    IdentifierBacked { durable_id: Option<DurableId> },
}

/// Per-instance naming state, derived from the attachment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentState {
    Unattached,
    Ephemeral,
    IdentifierBacked,
}

impl AttachmentState {
    pub fn of(attachment: Option<&NameAttachment>) -> Self {
        match attachment.map(NameAttachment::kind) {
            None => AttachmentState::Unattached,
            Some(AttachmentKind::Ephemeral) => AttachmentState::Ephemeral,
            Some(AttachmentKind::IdentifierBacked { .. }) => AttachmentState::IdentifierBacked,
        }
    }
}

impl std::fmt::Display for AttachmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentState::Unattached => write!(f, "unattached"),
            AttachmentState::Ephemeral => write!(f, "ephemeral"),
            AttachmentState::IdentifierBacked => write!(f, "identifier_backed"),
        }
    }
}

/// A nickname attached to one entity instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAttachment {
    name: Nickname,
    kind: AttachmentKind,
}

impl NameAttachment {
    /// Attachment for an entity without durable identity.
    pub fn ephemeral(name: Nickname) -> Self {
        Self {
            name,
            kind: AttachmentKind::Ephemeral,
        }
    }

    /// Attachment for a landmark. The durable id is resolved once, here,
    /// and cached for the attachment's lifetime.
    pub fn identifier_backed(name: Nickname, identity: &LandmarkIdentity) -> Self {
        Self {
            name,
            kind: AttachmentKind::IdentifierBacked {
                durable_id: resolve_durable_id(identity),
            },
        }
    }

    /// Attachment for a landmark whose durable id is already known.
    pub fn with_durable_id(name: Nickname, durable_id: DurableId) -> Self {
        Self {
            name,
            kind: AttachmentKind::IdentifierBacked {
                durable_id: Some(durable_id),
            },
        }
    }

    pub fn name(&self) -> &Nickname {
        &self.name
    }

    pub fn kind(&self) -> &AttachmentKind {
        &self.kind
    }

    /// Update the name in place. The kind and cached durable id never change.
    pub fn rename(&mut self, name: Nickname) {
        self.name = name;
    }

    pub fn durable_id(&self) -> Option<&DurableId> {
        match &self.kind {
            AttachmentKind::Ephemeral => None,
            AttachmentKind::IdentifierBacked { durable_id } => durable_id.as_ref(),
        }
    }

    pub fn is_identifier_backed(&self) -> bool {
        matches!(self.kind, AttachmentKind::IdentifierBacked { .. })
    }

    /// Label override for targeting, `None` when the name is empty.
    pub fn label(&self) -> Option<&str> {
        self.name.as_label()
    }
}
