//! Typed repository over the persisted quiz keys.
//!
//! `QuizRepository` is the only code that knows the storage key strings and
//! the JSON encoding of each value. Services hold one and never talk to the
//! `KvStore` directly.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use skinquiz_types::answer::AnswerSet;
use skinquiz_types::error::{QuizError, RepositoryError, ResetError};
use skinquiz_types::favorites::Favorites;
use skinquiz_types::results::QuizResults;
use skinquiz_types::storage::{COMPLETED_MARKER, StorageKey};

use crate::storage::kv_store::KvStore;

/// Typed access to the four quiz keys of a [`KvStore`].
///
/// Cheap to clone; clones share the underlying store.
pub struct QuizRepository<K: KvStore> {
    store: Arc<K>,
}

impl<K: KvStore> Clone for QuizRepository<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<K: KvStore> QuizRepository<K> {
    pub fn new(store: Arc<K>) -> Self {
        Self { store }
    }

    /// Load the stored answer set. A missing key yields an empty set.
    pub async fn load_answers(&self) -> Result<AnswerSet, QuizError> {
        Ok(self.read_json(StorageKey::Answers).await?.unwrap_or_default())
    }

    pub async fn save_answers(&self, answers: &AnswerSet) -> Result<(), QuizError> {
        self.write_json(StorageKey::Answers, answers).await
    }

    pub async fn load_results(&self) -> Result<Option<QuizResults>, QuizError> {
        self.read_json(StorageKey::Results).await
    }

    /// Store results, then the completed marker.
    ///
    /// If the results write fails the marker is not written. If only the
    /// marker write fails the results stay stored and
    /// [`QuizError::MarkerNotWritten`] is returned; completion is still read
    /// from the results key, so the quiz counts as completed on next load.
    pub async fn save_results(&self, results: &QuizResults) -> Result<(), QuizError> {
        self.write_json(StorageKey::Results, results).await?;
        self.store
            .set(StorageKey::Completed.as_str(), COMPLETED_MARKER)
            .await
            .map_err(|source| QuizError::MarkerNotWritten { source })
    }

    /// Whether results are stored, without decoding them.
    ///
    /// This is the "quiz completed" signal other screens read.
    pub async fn has_results(&self) -> Result<bool, QuizError> {
        let raw = self
            .store
            .get(StorageKey::Results.as_str())
            .await
            .map_err(|e| QuizError::persistence(StorageKey::Results, e))?;
        Ok(raw.is_some())
    }

    /// Load favorites. A missing key yields an empty set.
    pub async fn load_favorites(&self) -> Result<Favorites, QuizError> {
        Ok(self
            .read_json(StorageKey::Favorites)
            .await?
            .unwrap_or_default())
    }

    pub async fn save_favorites(&self, favorites: &Favorites) -> Result<(), QuizError> {
        self.write_json(StorageKey::Favorites, favorites).await
    }

    /// Remove answers, results and the completed marker.
    ///
    /// Deletes run in order and every key is attempted even after a failure.
    /// Favorites are left alone.
    pub async fn clear_quiz(&self) -> Result<(), ResetError> {
        let mut cleared = Vec::new();
        let mut failed = Vec::new();

        for key in StorageKey::QUIZ_KEYS {
            match self.store.remove(key.as_str()).await {
                Ok(()) => cleared.push(key),
                Err(e) => failed.push((key, e)),
            }
        }

        if failed.is_empty() {
            Ok(())
        } else if cleared.is_empty() {
            Err(ResetError::Total { failed })
        } else {
            Err(ResetError::Partial { cleared, failed })
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, QuizError> {
        let raw = self
            .store
            .get(key.as_str())
            .await
            .map_err(|e| QuizError::persistence(key, e))?;

        match raw {
            Some(text) => serde_json::from_str(&text).map(Some).map_err(|e| {
                QuizError::persistence(key, RepositoryError::Query(format!("invalid JSON value: {e}")))
            }),
            None => Ok(None),
        }
    }

    async fn write_json<T: Serialize + Sync>(&self, key: StorageKey, value: &T) -> Result<(), QuizError> {
        let text = serde_json::to_string(value).map_err(|e| {
            QuizError::persistence(key, RepositoryError::Query(format!("failed to serialize value: {e}")))
        })?;

        self.store
            .set(key.as_str(), &text)
            .await
            .map_err(|e| QuizError::persistence(key, e))?;

        tracing::debug!(key = %key, bytes = text.len(), "stored value");
        Ok(())
    }
}
