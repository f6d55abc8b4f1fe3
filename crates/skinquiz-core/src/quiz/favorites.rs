//! Favorites service.
//!
//! Favorites have their own lifecycle: a quiz reset does not touch them.

use skinquiz_types::error::QuizError;
use skinquiz_types::favorites::Favorites;

use crate::quiz::repository::QuizRepository;
use crate::storage::kv_store::KvStore;

pub struct FavoritesService<K: KvStore> {
    repo: QuizRepository<K>,
    favorites: Favorites,
}

impl<K: KvStore> FavoritesService<K> {
    pub fn new(repo: QuizRepository<K>) -> Self {
        Self {
            repo,
            favorites: Favorites::new(),
        }
    }

    /// Replace the in-memory set with the persisted list (duplicates dropped).
    pub async fn load(&mut self) -> Result<(), QuizError> {
        self.favorites = self.repo.load_favorites().await?;
        Ok(())
    }

    /// Add `product_name` if absent, remove it if present, then persist.
    ///
    /// Returns whether the product is a favorite afterwards. The in-memory
    /// toggle stands even if the write fails.
    pub async fn toggle(&mut self, product_name: &str) -> Result<bool, QuizError> {
        let now_favorite = self.favorites.toggle(product_name);

        self.repo
            .save_favorites(&self.favorites)
            .await
            .inspect_err(|e| {
                tracing::warn!(product_name, error = %e, "favorite change kept in memory only");
            })?;

        Ok(now_favorite)
    }

    pub fn is_favorite(&self, product_name: &str) -> bool {
        self.favorites.contains(product_name)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }
}
