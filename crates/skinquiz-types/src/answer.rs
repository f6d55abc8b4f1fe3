//! The in-progress answer set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::question::QuizOption;

/// Question id of the skin type question.
pub const SKIN_TYPE: &str = "skinType";
/// Question id of the primary concern question.
pub const CONCERNS: &str = "concerns";
/// Question id of the age range question.
pub const AGE: &str = "age";
/// Question id of the budget question.
pub const BUDGET: &str = "budget";

/// Mapping from question id to the selected option.
///
/// Serialized as a JSON object keyed by question id. Keys are not checked
/// against the catalog and values are not checked against the question's
/// declared options; callers only pass options they took from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, QuizOption>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the answer for `question_id`.
    ///
    /// Returns the previously selected option, if any.
    pub fn insert(&mut self, question_id: impl Into<String>, option: QuizOption) -> Option<QuizOption> {
        self.0.insert(question_id.into(), option)
    }

    pub fn get(&self, question_id: &str) -> Option<&QuizOption> {
        self.0.get(question_id)
    }

    /// The selected option value for `question_id`, if answered.
    pub fn value_of(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(|o| o.value.as_str())
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Number of answered question ids (including any unknown ids).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuizOption)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, QuizOption)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, QuizOption)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
