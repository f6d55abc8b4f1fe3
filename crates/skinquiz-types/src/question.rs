//! Question and option types.
//!
//! Questions are fixed at build time (see the catalog in `skinquiz-core`).
//! An option is identified by its `value`; label and description are display
//! text only.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One selectable answer to a [`Question`].
///
/// Equality and hashing consider `value` only, so an option loaded from
/// storage with stale label text still matches the catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl QuizOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl PartialEq for QuizOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for QuizOption {}

impl Hash for QuizOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique among the fixed question set (e.g. `skinType`).
    pub id: String,
    /// Prompt text shown to the user.
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Options in display order. Values are unique within a question.
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Look up one of this question's declared options by value.
    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Whether `value` is one of this question's declared option values.
    pub fn accepts(&self, value: &str) -> bool {
        self.option(value).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skin_type() -> Question {
        Question {
            id: "skinType".to_string(),
            prompt: "What is your skin type?".to_string(),
            subtitle: None,
            options: vec![
                QuizOption::new("oily", "Oily").with_description("Shiny, large pores"),
                QuizOption::new("dry", "Dry"),
            ],
        }
    }

    #[test]
    fn test_option_equality_is_by_value() {
        let a = QuizOption::new("oily", "Oily");
        let b = QuizOption::new("oily", "Very oily").with_description("different text");
        let c = QuizOption::new("dry", "Oily");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_option_lookup() {
        let q = skin_type();
        assert_eq!(q.option("dry").map(|o| o.label.as_str()), Some("Dry"));
        assert!(q.option("normal").is_none());
        assert!(q.accepts("oily"));
        assert!(!q.accepts("Oily"));
    }

    #[test]
    fn test_option_serialize_omits_missing_description() {
        let json = serde_json::to_string(&QuizOption::new("18-24", "18-24 years old")).unwrap();
        assert_eq!(json, r#"{"value":"18-24","label":"18-24 years old"}"#);
    }

    #[test]
    fn test_question_serializes_prompt_as_question() {
        let json = serde_json::to_value(skin_type()).unwrap();
        assert_eq!(json["question"], "What is your skin type?");
        assert!(json.get("subtitle").is_none());
    }
}
