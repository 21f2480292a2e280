//! Errors surfaced by the notifier's direct calls.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for [`Notifier::post_tweet`](super::Notifier::post_tweet).
///
/// An API answer of `"success": false` is not an error; it decodes into a
/// [`TweetResult`](super::TweetResult) and is returned to the caller.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request never produced a response.
    #[error("Failed to reach tweet API: {0}")]
    Transport(#[from] HttpError),

    /// The response body was not a tweet API answer.
    #[error("Failed to decode tweet API response (HTTP {status}): {source}")]
    Decode {
        /// Status of the undecodable response
        status: http::StatusCode,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode tweet API request: {0}")]
    Encode(#[source] serde_json::Error),
}
