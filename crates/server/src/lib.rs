//! roster-server — HTTP server for roster.
//!
//! Provides the REST API over the member store. Store and query logic
//! lives in `roster-core`.

/// REST API layer: Axum router, HTTP handlers, models, metrics.
pub mod api;
