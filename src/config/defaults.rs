//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Default tweet API endpoint.
pub const ENDPOINT: &str = "http://localhost:5001/api/post-tweet";

/// Default request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default message appended to purchase tweets.
pub const CUSTOM_MESSAGE: &str = "🎉";
