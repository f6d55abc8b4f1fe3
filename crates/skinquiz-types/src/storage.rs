//! Storage types.
//!
//! The four logical keys of the local store. The key strings are shared
//! with earlier installations and must not change.

use std::fmt;

/// Marker value written under [`StorageKey::Completed`].
pub const COMPLETED_MARKER: &str = "true";

/// Persisted keys owned by the quiz state module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// JSON answer set.
    Answers,
    /// JSON results; presence means the quiz is completed.
    Results,
    /// Redundant `"true"` marker written alongside results.
    Completed,
    /// JSON array of product names.
    Favorites,
}

impl StorageKey {
    /// Keys cleared by a quiz reset, in deletion order.
    pub const QUIZ_KEYS: [StorageKey; 3] = [
        StorageKey::Answers,
        StorageKey::Results,
        StorageKey::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Answers => "skincare_quiz_answers",
            StorageKey::Results => "skincare_quiz_results",
            StorageKey::Completed => "skincare_quiz_completed",
            StorageKey::Favorites => "skincare_favorites",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
