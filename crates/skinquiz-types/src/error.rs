use thiserror::Error;

use crate::storage::StorageKey;

/// Errors from repository operations (used by trait definitions in skinquiz-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store could not be reached (pool closed, timed out, or I/O failure).
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Outcome of a quiz reset that did not clear every key.
///
/// Keys are deleted one after another with no transaction, so some may be
/// gone while others remain.
#[derive(Debug, Error)]
pub enum ResetError {
    #[error("quiz reset partially failed: {} cleared, {} not cleared", .cleared.len(), .failed.len())]
    Partial {
        cleared: Vec<StorageKey>,
        failed: Vec<(StorageKey, RepositoryError)>,
    },

    #[error("quiz reset failed: no keys cleared")]
    Total {
        failed: Vec<(StorageKey, RepositoryError)>,
    },
}

impl ResetError {
    /// Keys whose delete failed.
    pub fn failed_keys(&self) -> Vec<StorageKey> {
        let failed = match self {
            ResetError::Partial { failed, .. } | ResetError::Total { failed } => failed,
        };
        failed.iter().map(|(key, _)| *key).collect()
    }
}

/// Errors surfaced by the quiz services.
///
/// In-memory state is already updated when a `Persistence` error is returned.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("persistence failure on '{key}': {source}")]
    Persistence {
        key: StorageKey,
        #[source]
        source: RepositoryError,
    },

    /// Results were stored but the `skincare_quiz_completed` marker write
    /// failed, leaving the marker behind the results key.
    #[error("results stored but completed marker not written: {source}")]
    MarkerNotWritten {
        #[source]
        source: RepositoryError,
    },

    #[error(transparent)]
    Reset(#[from] ResetError),

    #[error("quiz incomplete: {answered} of {required} questions answered")]
    Incomplete { answered: usize, required: usize },
}

impl QuizError {
    pub fn persistence(key: StorageKey, source: RepositoryError) -> Self {
        QuizError::Persistence { key, source }
    }

    /// Whether this error came from the storage layer (write, read, or decode).
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            QuizError::Persistence { .. } | QuizError::MarkerNotWritten { .. } | QuizError::Reset(_)
        )
    }
}
