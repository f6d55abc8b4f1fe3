//! Shared domain types for the skin quiz.
//!
//! This crate contains the types used across the workspace: questions and
//! their options, the in-progress answer set, derived results, favorites,
//! storage keys, configuration, and the error enums.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod answer;
pub mod config;
pub mod error;
pub mod favorites;
pub mod question;
pub mod results;
pub mod storage;
