//! Domain entities for per-instance naming.

pub mod attachment;
pub mod identity;
pub mod kind;

pub use attachment::{AttachmentKind, AttachmentState, NameAttachment};
pub use identity::resolve_durable_id;
pub use kind::EntityKind;
