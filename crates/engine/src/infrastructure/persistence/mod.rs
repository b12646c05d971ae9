//! Save-data persistence.
//!
//! - `document` - keyed piece tree handed to save/load hooks
//! - `naming_section` - naming store <-> world data section
//! - `actor_data` - creature nickname inside per-actor data
//! - `save_file` - JSON save file on disk

pub mod actor_data;
pub mod document;
pub mod error;
pub mod naming_section;
pub mod save_file;

pub use actor_data::{read_actor_data, write_actor_data, NICKNAME_KEY};
pub use document::{CompoundPiece, DataPiece, PieceValue};
pub use error::PersistenceError;
pub use naming_section::{LoadSummary, NamingSection};
pub use save_file::{EntityRecord, SaveFile, WORLD_DATA_KEY};
