//! Configuration constants.
//!
//! This module defines the constants used throughout the crate, including
//! transport timeouts and the HTTP status accepted by the feed mapper.

/// Per-request timeout in seconds for the production HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds.
/// Kept below the request timeout so unreachable hosts fail fast.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for feed requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("feed_loader/", env!("CARGO_PKG_VERSION"));

/// Accept header value sent with feed requests.
pub const FEED_ACCEPT_HEADER: &str = "application/json";

// HTTP status codes (for clarity and consistency)
/// The only status code whose body is decoded into feed items.
pub const HTTP_STATUS_OK: u16 = 200;
