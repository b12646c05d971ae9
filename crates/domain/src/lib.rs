//! Nicknames domain: naming store, name attachments, and durable identity.
//!
//! Pure types with no I/O. Logging, persistence, and host integration live in
//! `nicknames-engine`.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{MirrorOutcome, NamingStore};
pub use entities::{resolve_durable_id, AttachmentKind, AttachmentState, EntityKind, NameAttachment};
pub use error::DomainError;
pub use ids::{DurableId, InstanceId};
pub use value_objects::{LandmarkIdentity, LandmarkModel, Nickname, PlacementRecord};
