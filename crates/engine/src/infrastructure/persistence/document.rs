//! Save document model.
//!
//! A save document is a tree of keyed pieces. A [`CompoundPiece`] holds an
//! ordered list of [`DataPiece`]s; each piece carries either text or a nested
//! compound. Keys are not required to be unique, but the lookup helpers
//! return the first match.

use serde::{Deserialize, Serialize};

/// Value carried by a data piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PieceValue {
    Text(String),
    Compound(CompoundPiece),
}

/// A keyed entry in a compound piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPiece {
    pub key: String,
    pub value: PieceValue,
}

impl DataPiece {
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PieceValue::Text(value.into()),
        }
    }

    pub fn compound(piece: CompoundPiece) -> Self {
        Self {
            key: piece.key.clone(),
            value: PieceValue::Compound(piece),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            PieceValue::Text(text) => Some(text),
            PieceValue::Compound(_) => None,
        }
    }
}

/// An ordered, keyed collection of data pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundPiece {
    pub key: String,
    #[serde(default)]
    pub pieces: Vec<DataPiece>,
}

impl CompoundPiece {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pieces: Vec::new(),
        }
    }

    pub fn pieces(&self) -> &[DataPiece] {
        &self.pieces
    }

    pub fn has_piece(&self, key: &str) -> bool {
        self.pieces.iter().any(|p| p.key == key)
    }

    pub fn add_piece(&mut self, piece: DataPiece) {
        self.pieces.push(piece);
    }

    /// Nested compound under `key`, if that key holds a compound.
    pub fn compound_piece(&self, key: &str) -> Option<&CompoundPiece> {
        self.pieces.iter().find_map(|p| match &p.value {
            PieceValue::Compound(c) if p.key == key => Some(c),
            _ => None,
        })
    }

    pub fn compound_piece_mut(&mut self, key: &str) -> Option<&mut CompoundPiece> {
        self.pieces.iter_mut().find_map(|p| match &mut p.value {
            PieceValue::Compound(c) if p.key == key => Some(c),
            _ => None,
        })
    }

    /// Remove the first piece with `key`, returning it.
    pub fn remove_piece(&mut self, key: &str) -> Option<DataPiece> {
        let index = self.pieces.iter().position(|p| p.key == key)?;
        Some(self.pieces.remove(index))
    }

    /// Text value under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.pieces
            .iter()
            .find(|p| p.key == key)
            .and_then(DataPiece::as_text)
    }

    /// Set a text value, replacing the first piece with that key.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        let piece = DataPiece::text(key, value);
        match self.pieces.iter_mut().find(|p| p.key == key) {
            Some(existing) => *existing = piece,
            None => self.pieces.push(piece),
        }
    }

    pub fn clear_pieces(&mut self) {
        self.pieces.clear();
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
