//! Local quiz wiring.
//!
//! `LocalQuiz` pins the core services to the SQLite key-value store in the
//! data directory. A presentation layer holds one and calls into it; nothing
//! else touches storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use skinquiz_core::quiz::answer_store::AnswerStore;
use skinquiz_core::quiz::favorites::FavoritesService;
use skinquiz_core::quiz::repository::QuizRepository;
use skinquiz_types::config::QuizConfig;
use skinquiz_types::error::QuizError;

use crate::config::load_config;
use crate::filesystem::resolve_data_dir;
use crate::sqlite::kv::SqliteKvStore;
use crate::sqlite::pool::{DatabasePool, database_url};

pub type LocalAnswerStore = AnswerStore<SqliteKvStore>;
pub type LocalFavorites = FavoritesService<SqliteKvStore>;

/// Install the global tracing subscriber using the filter and OTel switch from
/// `{data_dir}/config.toml`.
///
/// Call once at host startup, before [`LocalQuiz::open`], so the open logs are
/// captured.
pub async fn init_tracing(data_dir: &Path) -> anyhow::Result<()> {
    let config = load_config(data_dir).await;
    skinquiz_observe::tracing_setup::init_tracing(&config.log_filter, config.enable_otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))
}

/// Quiz state and favorites backed by the local database.
pub struct LocalQuiz {
    pub answers: LocalAnswerStore,
    pub favorites: LocalFavorites,
    repo: QuizRepository<SqliteKvStore>,
    config: QuizConfig,
    data_dir: PathBuf,
}

impl LocalQuiz {
    /// Open the store in the resolved data directory.
    pub async fn open_default() -> anyhow::Result<Self> {
        Self::open(&resolve_data_dir()).await
    }

    /// Open (creating if needed) the store in `data_dir` and load persisted
    /// state.
    ///
    /// Failing to read or decode a persisted value is logged and only the
    /// affected part starts empty; only failing to open the database is an
    /// error.
    pub async fn open(data_dir: &Path) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let config = load_config(data_dir).await;
        let pool = DatabasePool::new(&database_url(data_dir, &config.database_file)).await?;
        let repo = QuizRepository::new(Arc::new(SqliteKvStore::new(pool)));

        let mut answers = AnswerStore::new(repo.clone());
        if let Err(e) = answers.load().await {
            tracing::warn!(error = %e, "quiz state not fully loaded");
        }

        let mut favorites = FavoritesService::new(repo.clone());
        if let Err(e) = favorites.load().await {
            tracing::warn!(error = %e, "could not load favorites, starting empty");
        }

        tracing::info!(
            data_dir = %data_dir.display(),
            answered = answers.answered_count(),
            completed = answers.has_results(),
            favorites = favorites.favorites().len(),
            "local quiz opened"
        );

        Ok(Self {
            answers,
            favorites,
            repo,
            config,
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// Whether results are stored, read straight from storage.
    ///
    /// For screens that only show a "completed" badge and do not hold the
    /// answer store.
    pub async fn quiz_completed(&self) -> Result<bool, QuizError> {
        self.repo.has_results().await
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
