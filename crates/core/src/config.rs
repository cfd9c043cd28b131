//! Global configuration constants for roster.
//!
//! Query defaults, server defaults, and middleware limits are defined here.
//! These are compile-time constants; runtime configuration is handled via CLI
//! arguments and environment variables in the server's `main.rs`.

/// Page returned when the `page` query parameter is absent or unusable.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the `limit` query parameter is absent or unusable.
pub const DEFAULT_LIMIT: usize = 10;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default location of the seed file read at startup.
pub const DEFAULT_SEED_PATH: &str = "./data/members.json";

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP request body size in bytes (1 MB).
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;

/// Interval between refreshes of the member gauge, in seconds.
pub const METRICS_REFRESH_SECS: u64 = 15;
