//! Observability setup for hosts embedding the skin quiz.

pub mod tracing_setup;
