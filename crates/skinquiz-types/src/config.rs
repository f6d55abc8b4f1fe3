//! Configuration types.
//!
//! `QuizConfig` represents the optional `config.toml` in the data directory.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the local quiz store.
///
/// Loaded from `{data_dir}/config.toml`. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// SQLite file name inside the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub enable_otel: bool,
}

fn default_database_file() -> String {
    "skinquiz.db".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
            log_filter: default_log_filter(),
            enable_otel: false,
        }
    }
}
