//! On-disk save file: world data plus the entities to re-materialize.

use std::path::Path;

use nicknames_domain::EntityKind;
use serde::{Deserialize, Serialize};

use super::document::CompoundPiece;
use super::error::PersistenceError;

pub const WORLD_DATA_KEY: &str = "world";

/// One saved entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub label: String,
    #[serde(flatten)]
    pub kind: EntityKind,
    /// Per-actor extended data.
    #[serde(default)]
    pub data: CompoundPiece,
}

/// Whole save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub world_data: CompoundPiece,
    #[serde(default)]
    pub entities: Vec<EntityRecord>,
}

impl Default for SaveFile {
    fn default() -> Self {
        Self {
            world_data: CompoundPiece::new(WORLD_DATA_KEY),
            entities: Vec::new(),
        }
    }
}

impl SaveFile {
    /// Read a save file from disk.
    pub fn read(path: &Path) -> Result<Self, PersistenceError> {
        let raw = std::fs::read_to_string(path).map_err(|e| PersistenceError::io(path, e))?;
        let save = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "Read save file");
        Ok(save)
    }

    /// Write the save file to disk as pretty JSON.
    pub fn write(&self, path: &Path) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|e| PersistenceError::io(path, e))?;
        tracing::debug!(path = %path.display(), entities = self.entities.len(), "Wrote save file");
        Ok(())
    }
}
