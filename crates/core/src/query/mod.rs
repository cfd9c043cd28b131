//! List query pipeline.
//!
//! A [`QuerySpec`] plus a store snapshot go in; a [`ResultPage`] comes out.
//! The pipeline is pure and never touches the store.

/// Case-insensitive free-text filter.
pub mod filter;
/// Filter → sort → paginate.
pub mod pipeline;
/// Query parameters, sort fields, and sort order.
pub mod spec;

pub use filter::matches_search;
pub use pipeline::{run_query, ResultPage};
pub use spec::{QuerySpec, SortField, SortOrder};
