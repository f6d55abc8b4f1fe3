//! Storage abstractions.
//!
//! Implementations live in skinquiz-infra.

pub mod kv_store;
