//! Answer store service.
//!
//! Holds the in-progress answer set, the derived results, and the completion
//! flag, mirrored to storage through a [`QuizRepository`].
//!
//! Two completion signals exist and are kept apart:
//! - [`AnswerStore::is_complete`]: every question has an answer (by count);
//! - [`AnswerStore::has_results`]: results have been derived and stored.
//!
//! Writes are optimistic. The in-memory change is applied first and kept when
//! the storage write fails; the error is logged and returned so the caller can
//! show a notice.

use skinquiz_types::answer::AnswerSet;
use skinquiz_types::error::QuizError;
use skinquiz_types::question::QuizOption;
use skinquiz_types::results::QuizResults;

use crate::catalog;
use crate::quiz::derive::derive;
use crate::quiz::repository::QuizRepository;
use crate::storage::kv_store::KvStore;

pub struct AnswerStore<K: KvStore> {
    repo: QuizRepository<K>,
    answers: AnswerSet,
    results: Option<QuizResults>,
    completed: bool,
}

impl<K: KvStore> AnswerStore<K> {
    /// Create an empty store. Call [`AnswerStore::load`] to pick up state
    /// persisted by an earlier run.
    pub fn new(repo: QuizRepository<K>) -> Self {
        Self {
            repo,
            answers: AnswerSet::new(),
            results: None,
            completed: false,
        }
    }

    /// Read the persisted answer set, results and completion state.
    ///
    /// Completion follows the presence of the stored results key regardless of
    /// how many answers are stored, and even when the value does not decode.
    /// Each part is read on its own: a part that fails to read or decode is
    /// left as it was in memory while the others are still applied. The first
    /// failure is returned.
    pub async fn load(&mut self) -> Result<(), QuizError> {
        let mut first_err = None;

        match self.repo.has_results().await {
            Ok(present) => self.completed = present,
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }

        match self.repo.load_answers().await {
            Ok(answers) => self.answers = answers,
            Err(e) => {
                tracing::warn!(error = %e, "stored answers not loaded");
                first_err.get_or_insert(e);
            }
        }

        match self.repo.load_results().await {
            Ok(results) => self.results = results,
            Err(e) => {
                tracing::warn!(error = %e, "stored results not loaded");
                first_err.get_or_insert(e);
            }
        }

        tracing::debug!(
            answered = self.answers.len(),
            has_results = self.completed,
            "loaded quiz state"
        );

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Insert or overwrite the answer for `question_id` and persist the whole
    /// answer set.
    ///
    /// The option is not checked against the question's declared options.
    pub async fn record_answer(
        &mut self,
        question_id: &str,
        option: QuizOption,
    ) -> Result<(), QuizError> {
        self.answers.insert(question_id, option);

        self.repo.save_answers(&self.answers).await.inspect_err(|e| {
            tracing::warn!(question_id, error = %e, "answer kept in memory only");
        })
    }

    /// Whether the number of answered ids equals the catalog size.
    ///
    /// Counts keys only: an unknown id counts the same as a real one.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == catalog::question_count()
    }

    /// Whether results exist (stored, or derived this session).
    ///
    /// Can be true while [`AnswerStore::results`] is `None` when the stored
    /// value could not be decoded.
    pub fn has_results(&self) -> bool {
        self.completed
    }

    /// Derive results from the current answers and persist them.
    ///
    /// Fails with [`QuizError::Incomplete`] before touching anything when
    /// [`AnswerStore::is_complete`] is false. On a storage failure the new
    /// results are still held in memory and the quiz counts as completed for
    /// this session.
    pub async fn complete(&mut self) -> Result<QuizResults, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::Incomplete {
                answered: self.answers.len(),
                required: catalog::question_count(),
            });
        }

        let results = derive(&self.answers);
        self.results = Some(results.clone());
        self.completed = true;

        self.repo.save_results(&results).await.inspect_err(|e| {
            tracing::warn!(error = %e, "results kept in memory only");
        })?;

        tracing::debug!(skin_type = %results.skin_profile.skin_type, "quiz completed");
        Ok(results)
    }

    /// Clear answers, results and the completion flag.
    ///
    /// Memory is cleared first. Storage deletes are attempted for all three
    /// keys; a partial or total failure comes back as [`QuizError::Reset`].
    pub async fn reset(&mut self) -> Result<(), QuizError> {
        self.answers.clear();
        self.results = None;
        self.completed = false;

        self.repo.clear_quiz().await.map_err(|e| {
            tracing::warn!(failed = ?e.failed_keys(), error = %e, "quiz reset not fully persisted");
            QuizError::from(e)
        })
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answer(&self, question_id: &str) -> Option<&QuizOption> {
        self.answers.get(question_id)
    }

    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn progress_percent(&self) -> f64 {
        catalog::progress_percent(&self.answers)
    }
}
