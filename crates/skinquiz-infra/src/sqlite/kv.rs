//! SQLite key-value store implementation.
//!
//! Implements `KvStore` from `skinquiz-core` over the `local_storage` table.
//! Values are stored verbatim; JSON encoding is the caller's concern.

use chrono::Utc;
use skinquiz_core::storage::kv_store::KvStore;
use skinquiz_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// Map a sqlx error to the storage-level error the core layer sees.
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!(error = %err, "local database unreachable");
            RepositoryError::Connection
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

/// SQLite-backed implementation of `KvStore`.
pub struct SqliteKvStore {
    pool: DatabasePool,
}

impl SqliteKvStore {
    /// Create a new KV store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// List all stored keys in ascending order.
    #[cfg(test)]
    async fn list_keys(&self) -> Result<Vec<String>, RepositoryError> {
        let rows = sqlx::query("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("key")
                    .map_err(map_sqlx_error)
            })
            .collect()
    }
}

impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM local_storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => {
                let value: String = row
                    .try_get("value")
                    .map_err(map_sqlx_error)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO local_storage (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::database_url;

    async fn test_store() -> (tempfile::TempDir, SqliteKvStore) {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::new(&database_url(dir.path(), "test.db"))
            .await
            .unwrap();
        (dir, SqliteKvStore::new(pool))
    }

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let (_dir, store) = test_store().await;

        store
            .set("skincare_favorites", r#"["Face Oil"]"#)
            .await
            .unwrap();

        let got = store.get("skincare_favorites").await.unwrap();
        assert_eq!(got.as_deref(), Some(r#"["Face Oil"]"#));
    }

    #[tokio::test]
    async fn test_get_nonexistent_returns_none() {
        let (_dir, store) = test_store().await;
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_upserts() {
        let (_dir, store) = test_store().await;

        store.set("skincare_quiz_completed", "false").await.unwrap();
        store.set("skincare_quiz_completed", "true").await.unwrap();

        let got = store.get("skincare_quiz_completed").await.unwrap();
        assert_eq!(got.as_deref(), Some("true"));
        assert_eq!(store.list_keys().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_keeps_created_at() {
        let (_dir, store) = test_store().await;

        store.set("k", "1").await.unwrap();
        let (created_before,): (String,) =
            sqlx::query_as("SELECT created_at FROM local_storage WHERE key = 'k'")
                .fetch_one(&store.pool.reader)
                .await
                .unwrap();

        store.set("k", "2").await.unwrap();
        let (created_after, updated_after): (String, String) =
            sqlx::query_as("SELECT created_at, updated_at FROM local_storage WHERE key = 'k'")
                .fetch_one(&store.pool.reader)
                .await
                .unwrap();

        assert_eq!(created_before, created_after);
        assert!(updated_after >= created_after);
    }

    #[tokio::test]
    async fn test_remove() {
        let (_dir, store) = test_store().await;

        store.set("temp", "value").await.unwrap();
        store.remove("temp").await.unwrap();

        assert!(store.get("temp").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_nonexistent_is_noop() {
        let (_dir, store) = test_store().await;
        store.remove("nope").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_keys_sorted() {
        let (_dir, store) = test_store().await;

        store.set("skincare_quiz_results", "{}").await.unwrap();
        store.set("skincare_favorites", "[]").await.unwrap();
        store.set("skincare_quiz_answers", "{}").await.unwrap();

        let keys = store.list_keys().await.unwrap();
        assert_eq!(
            keys,
            vec![
                "skincare_favorites",
                "skincare_quiz_answers",
                "skincare_quiz_results"
            ]
        );
    }

    #[tokio::test]
    async fn test_closed_pool_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::new(&database_url(dir.path(), "closed.db"))
            .await
            .unwrap();
        let store = SqliteKvStore::new(pool.clone());

        pool.reader.close().await;
        pool.writer.close().await;

        assert!(matches!(
            store.get("skincare_quiz_answers").await,
            Err(RepositoryError::Connection)
        ));
        assert!(matches!(
            store.set("skincare_quiz_answers", "{}").await,
            Err(RepositoryError::Connection)
        ));
    }

    #[tokio::test]
    async fn test_bad_sql_is_query_error() {
        let (_dir, store) = test_store().await;
        let err = sqlx::query("SELECT nope FROM missing_table")
            .execute(&store.pool.reader)
            .await
            .map_err(map_sqlx_error)
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)));
    }

    #[tokio::test]
    async fn test_values_stored_verbatim() {
        let (_dir, store) = test_store().await;

        let raw = "{\"skinType\":{\"value\":\"oily\",\"label\":\"Oily\"}}";
        store.set("skincare_quiz_answers", raw).await.unwrap();

        let (stored,): (String,) =
            sqlx::query_as("SELECT value FROM local_storage WHERE key = 'skincare_quiz_answers'")
                .fetch_one(&store.pool.reader)
                .await
                .unwrap();
        assert_eq!(stored, raw);
    }
}
