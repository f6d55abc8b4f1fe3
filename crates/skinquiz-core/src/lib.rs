//! Business logic and storage trait definitions for the skin quiz.
//!
//! This crate defines the `KvStore` port that the infrastructure layer
//! implements, the typed `QuizRepository` over the persisted keys, and the
//! services a presentation layer drives. It depends only on `skinquiz-types`
//! -- never on `skinquiz-infra` or any database/IO crate.

pub mod catalog;
pub mod quiz;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
