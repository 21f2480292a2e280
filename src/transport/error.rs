//! Transport failures.

use thiserror::Error;

/// Why a tweet API call produced no answer.
///
/// A call is attempted once; the notifier decides whether the failure is
/// logged or handed back.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Nothing answered at the endpoint (DNS, refused or reset connection).
    #[error("Tweet API unreachable: {0}")]
    Unreachable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The client timeout elapsed before the answer was complete.
    #[error("Request timed out")]
    Timeout,

    /// reqwest refused to assemble the request, e.g. an unusable endpoint.
    #[error("Malformed request: {0}")]
    Malformed(String),

    /// The reqwest client itself could not be set up.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] Box<dyn std::error::Error + Send + Sync>),
}
