//! The tweet API call as a value, and the client seam that carries it.

use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;
use serde::Serialize;
use url::Url;

use super::HttpError;

/// Header carrying the shared secret expected by the tweet API.
pub const API_KEY_HEADER: &str = "x-api-key";

/// One authenticated JSON `POST` to the tweet API.
///
/// The body is already serialized, so a client only has to put it on the
/// wire together with [`headers`](Self::headers).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Tweet API endpoint
    pub endpoint: Url,
    /// Value of the `X-API-Key` header
    pub api_key: HeaderValue,
    /// Serialized JSON body
    pub json: Vec<u8>,
}

impl ApiRequest {
    /// Serializes `body` into a request for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if `body` cannot be rendered as JSON.
    pub fn json<T>(endpoint: Url, api_key: HeaderValue, body: &T) -> serde_json::Result<Self>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            endpoint,
            api_key,
            json: serde_json::to_vec(body)?,
        })
    }

    /// Headers sent with the body: the JSON content type and the API key.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());
        headers
    }
}

/// What the tweet API sent back, body fully buffered.
///
/// The status is kept only for diagnostics; the API reports its verdict
/// in the JSON body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Carries an [`ApiRequest`] to the tweet API.
///
/// The notifier only ever talks to the API through this trait, so tests
/// can substitute a client that records requests and replays canned
/// answers.
///
/// # Example
///
/// ```ignore
/// use tweet_notify::transport::{ApiRequest, ApiResponse, HttpClient, HttpError};
///
/// struct CannedClient {
///     answer: ApiResponse,
/// }
///
/// impl HttpClient for CannedClient {
///     async fn request(&self, _req: ApiRequest) -> Result<ApiResponse, HttpError> {
///         Ok(self.answer.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends `req` once and returns whatever the API answered.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no answer arrives: the endpoint is
    /// unreachable, the timeout elapses, or the request cannot be built.
    fn request(
        &self,
        req: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, HttpError>> + Send;
}
