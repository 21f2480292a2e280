//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{ApiRequest, ApiResponse, HttpClient, HttpError};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// Cloning is cheap; clones share the same connection pool.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use http::HeaderValue;
/// use tweet_notify::transport::{ApiRequest, HttpClient, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10))?;
/// let url = Url::parse("http://localhost:5001/api/post-tweet")?;
/// let body = serde_json::json!({ "tweet": "hi" });
/// let request = ApiRequest::json(url, HeaderValue::from_static("secret"), &body)?;
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with reqwest's default configuration.
    ///
    /// No overall request timeout is applied.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client that aborts any request taking longer than `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Build(Box::new(e)))?;

        Ok(Self { inner })
    }

    /// Creates an HTTP client from an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: ApiRequest) -> Result<ApiResponse, HttpError> {
        let response = self
            .inner
            .post(req.endpoint.as_str())
            .headers(req.headers())
            .body(req.json)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout
                } else if e.is_builder() {
                    HttpError::Malformed(e.to_string())
                } else {
                    HttpError::Unreachable(Box::new(e))
                }
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Unreachable(Box::new(e))
            }
        })?;

        Ok(ApiResponse::new(status, body))
    }
}
