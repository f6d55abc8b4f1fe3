//! Saved product names.

use serde::{Deserialize, Serialize};

/// Set of favorited product names, kept in insertion order.
///
/// Persisted as a plain JSON array of strings, which can hold duplicates, so
/// set semantics are enforced here: deserializing keeps the first occurrence
/// of each name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Favorites {
    names: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Remove `name` if present, append it otherwise.
    ///
    /// Returns `true` if `name` is a favorite after the call.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Favorites {
    fn from(list: Vec<String>) -> Self {
        let mut names: Vec<String> = Vec::with_capacity(list.len());
        for name in list {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self { names }
    }
}

impl From<Favorites> for Vec<String> {
    fn from(favorites: Favorites) -> Self {
        favorites.names
    }
}
