//! # roster-core
//!
//! In-memory member store and the list query pipeline behind the roster
//! service: filtering by free-text search, stable sorting, and pagination.
//!
//! This is the core library crate with zero async dependencies; the HTTP
//! surface lives in `roster-server`.

/// Global configuration constants: query defaults, server defaults, limits.
pub mod config;
/// The `Member` entity, its mutable field set, and payload validation.
pub mod member;
/// List query pipeline: query specification, search filter, sort, and pagination.
pub mod query;
/// Storage layer: the member store and seed-file loading.
pub mod storage;
