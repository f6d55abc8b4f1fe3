//! In-memory `KvStore` with failure injection, shared by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use skinquiz_types::error::RepositoryError;

use crate::storage::kv_store::KvStore;

#[derive(Default)]
pub(crate) struct MockKvStore {
    entries: Mutex<HashMap<String, String>>,
    failing_keys: Mutex<HashSet<String>>,
}

impl MockKvStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every operation on `key` fail until [`MockKvStore::heal`].
    pub(crate) fn fail_on(&self, key: &str) {
        self.failing_keys.lock().unwrap().insert(key.to_string());
    }

    pub(crate) fn heal(&self) {
        self.failing_keys.lock().unwrap().clear();
    }

    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub(crate) fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn check(&self, key: &str) -> Result<(), RepositoryError> {
        if self.failing_keys.lock().unwrap().contains(key) {
            Err(RepositoryError::Query(format!("injected failure on {key}")))
        } else {
            Ok(())
        }
    }
}

impl KvStore for MockKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        self.check(key)?;
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.check(key)?;
        self.put_raw(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.check(key)?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
