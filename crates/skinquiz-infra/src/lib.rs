//! Infrastructure layer for the skin quiz.
//!
//! Contains the SQLite implementation of the `KvStore` trait defined in
//! `skinquiz-core`, data directory resolution, `config.toml` loading, and
//! [`local::LocalQuiz`], which wires the services to the local database for
//! a presentation layer.

pub mod config;
pub mod filesystem;
pub mod local;
pub mod sqlite;
