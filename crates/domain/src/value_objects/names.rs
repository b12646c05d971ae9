//! Nickname value object
//!
//! Nicknames are free-form text. Unlike the validated name newtypes of a
//! typical domain, an empty nickname is representable: it means "no custom
//! name" wherever a display label is derived.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-chosen display name for an entity. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build a nickname from command words, joined with single spaces.
    ///
    /// Words are taken verbatim; no trimming or case folding happens here.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let joined = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The name as a label override, or `None` when empty.
    pub fn as_label(&self) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Nickname {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Nickname {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Nickname> for String {
    fn from(name: Nickname) -> String {
        name.0
    }
}
