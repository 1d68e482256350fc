//! # Locator Paths
//!
//! Defines [`ValuePath`], the dotted/bracketed locator attached to every
//! diagnostic. Paths are built incrementally as validation descends so
//! they mirror the traversal exactly: `editor.tabSize`, `items[2].name`.

use serde::{Deserialize, Serialize};

/// A locator into a structured value.
///
/// The root is the empty path. Descending into an object property appends
/// `.key` (bare `key` at the root); descending into an array element
/// appends `[index]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValuePath(String);

impl ValuePath {
    /// The empty root path.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// A path starting at a named top-level key.
    pub fn from_key(key: &str) -> Self {
        Self(key.to_string())
    }

    /// The path of a named child property.
    pub fn key(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// The path of an indexed child element.
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The rendered locator string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ValuePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for ValuePath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ValuePath {
    fn from(s: String) -> Self {
        Self(s)
    }
}
