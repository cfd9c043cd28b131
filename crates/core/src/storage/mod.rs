//! Storage layer: the member store and seed-file loading.
//!
//! Data lives in-memory in a [`MemberStore`]. Nothing is written back to
//! disk; the seed file is read once at startup.

/// Seed-file parsing.
pub mod seed;
/// The shared, lock-guarded member collection.
pub mod store;

pub use seed::{read_seed_file, SeedError};
pub use store::{MemberStore, StoreError};
