//! The tweet API's answer.

use std::fmt;

use serde::Deserialize;

/// Outcome reported by the tweet API.
///
/// `success` must be present in the response; `tweet_url` is expected on
/// success and `error` on failure, but neither is enforced. Unknown fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TweetResult {
    /// Whether the API posted the tweet
    pub success: bool,

    /// Link to the posted tweet
    #[serde(default)]
    pub tweet_url: Option<String>,

    /// Reason given by the API for a failure
    #[serde(default)]
    pub error: Option<String>,
}

impl fmt::Display for TweetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.success, &self.tweet_url, &self.error) {
            (true, Some(url), _) => write!(f, "tweet posted: {url}"),
            (true, None, _) => write!(f, "tweet posted"),
            (false, _, Some(error)) => write!(f, "tweet rejected: {error}"),
            (false, _, None) => write!(f, "tweet rejected"),
        }
    }
}
