//! Persistence adapter between the naming store and a save document.
//!
//! The store is written as a single compound section of the world data, one
//! text record per durable id:
//!
//! ```text
//! world
//! └── gordoNames
//!     ├── "gordo-3" = "Chomper"
//!     └── "site-7"  = "Bob"
//! ```

use nicknames_domain::{DurableId, NamingStore, Nickname};

use super::document::{CompoundPiece, DataPiece, PieceValue};

/// Counts reported by [`NamingSection::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
    /// True when the document had no naming section at all.
    pub section_missing: bool,
}

/// Reads and writes the naming section of world data.
#[derive(Debug, Clone)]
pub struct NamingSection {
    name: String,
}

impl NamingSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Flush every store entry into `data`, creating the section or replacing
    /// its records.
    pub fn save(&self, store: &NamingStore, data: &mut CompoundPiece) {
        match data.compound_piece_mut(&self.name) {
            Some(section) => {
                section.clear_pieces();
                write_entries(store, section);
            }
            None => {
                // A text piece squatting on the section key is dropped.
                data.remove_piece(&self.name);
                let mut section = CompoundPiece::new(self.name.clone());
                write_entries(store, &mut section);
                data.add_piece(DataPiece::compound(section));
            }
        }

        tracing::debug!(
            section = %self.name,
            entries = store.len(),
            "Saved naming section"
        );
    }

    /// Replace the store contents with the section in `data`.
    ///
    /// The store is cleared first, so a missing section leaves it empty.
    /// Records with an empty key or a non-text value are skipped. A key seen
    /// twice keeps its last value.
    pub fn load(&self, store: &mut NamingStore, data: &CompoundPiece) -> LoadSummary {
        store.clear();

        let Some(section) = data.compound_piece(&self.name) else {
            tracing::debug!(section = %self.name, "No naming section in save data");
            return LoadSummary {
                section_missing: true,
                ..LoadSummary::default()
            };
        };

        let mut summary = LoadSummary::default();
        for piece in section.pieces() {
            let PieceValue::Text(name) = &piece.value else {
                tracing::warn!(key = %piece.key, "Skipping non-text naming record");
                summary.skipped += 1;
                continue;
            };
            let id = match DurableId::new(piece.key.clone()) {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping naming record");
                    summary.skipped += 1;
                    continue;
                }
            };
            if store.set(id, Nickname::new(name.clone())).is_some() {
                tracing::warn!(key = %piece.key, "Duplicate naming record, keeping the later one");
            } else {
                summary.loaded += 1;
            }
        }

        tracing::info!(
            section = %self.name,
            loaded = summary.loaded,
            skipped = summary.skipped,
            "Loaded naming section"
        );
        summary
    }
}

fn write_entries(store: &NamingStore, section: &mut CompoundPiece) {
    for (id, name) in store.entries() {
        section.add_piece(DataPiece::text(id.as_str(), name.as_str()));
    }
}
