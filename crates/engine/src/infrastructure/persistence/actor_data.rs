//! Nickname record inside a creature's own save data.
//!
//! Creature names never reach the naming store. They ride along with the
//! creature's per-actor data instead, under a single `nickname` key.

use nicknames_domain::{AttachmentKind, NameAttachment, Nickname};

use super::document::CompoundPiece;

pub const NICKNAME_KEY: &str = "nickname";

/// Write an ephemeral attachment's name into a creature's data piece.
///
/// Identifier-backed attachments are persisted through the naming section
/// and are not written here.
pub fn write_actor_data(attachment: &NameAttachment, piece: &mut CompoundPiece) {
    if let AttachmentKind::Ephemeral = attachment.kind() {
        piece.set_value(NICKNAME_KEY, attachment.name().as_str());
    }
}

/// Restore an ephemeral attachment from a creature's data piece.
pub fn read_actor_data(piece: &CompoundPiece) -> Option<NameAttachment> {
    piece
        .value(NICKNAME_KEY)
        .filter(|name| !name.is_empty())
        .map(|name| NameAttachment::ephemeral(Nickname::new(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nicknames_domain::DurableId;

    #[test]
    fn ephemeral_name_round_trips() {
        let mut piece = CompoundPiece::new("actor");
        write_actor_data(
            &NameAttachment::ephemeral(Nickname::new("Big Bob")),
            &mut piece,
        );
        assert_eq!(piece.value(NICKNAME_KEY), Some("Big Bob"));

        let restored = read_actor_data(&piece).unwrap();
        assert_eq!(restored, NameAttachment::ephemeral(Nickname::new("Big Bob")));
    }

    #[test]
    fn identifier_backed_is_not_written() {
        let mut piece = CompoundPiece::new("actor");
        let attachment = NameAttachment::with_durable_id(
            Nickname::new("Chomper"),
            DurableId::new("gordo-3").unwrap(),
        );
        write_actor_data(&attachment, &mut piece);
        assert!(piece.is_empty());
    }

    #[test]
    fn missing_or_empty_restores_nothing() {
        let mut piece = CompoundPiece::new("actor");
        assert!(read_actor_data(&piece).is_none());

        piece.set_value(NICKNAME_KEY, "");
        assert!(read_actor_data(&piece).is_none());
    }
}
