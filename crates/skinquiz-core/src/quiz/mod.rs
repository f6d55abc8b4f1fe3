//! Quiz state services.
//!
//! - [`repository::QuizRepository`]: typed access to the persisted keys.
//! - [`answer_store::AnswerStore`]: answers, completion, results, reset.
//! - [`derive::derive`]: the recommendation deriver.
//! - [`favorites::FavoritesService`]: saved product names.

pub mod answer_store;
pub mod derive;
pub mod favorites;
pub mod repository;
