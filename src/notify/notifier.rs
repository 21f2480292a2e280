//! The notifier client.

use http::HeaderValue;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::defaults;
use crate::purchase::{PurchaseEvent, derive_from_webhook};
use crate::transport::{ApiRequest, HttpClient};

use super::{NotifyError, TweetRequest, TweetResult};

/// Client that turns application events into tweet API calls.
///
/// Every call is a single POST with no retry. Two flavours exist:
///
/// - [`notify_purchase`](Self::notify_purchase) and
///   [`notify_webhook`](Self::notify_webhook) are best-effort side effects.
///   They log the outcome and never return an error, so a purchase flow
///   cannot be failed by a tweet.
/// - [`post_tweet`](Self::post_tweet) is a direct action and hands
///   transport and decode failures back to the caller.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```no_run
/// use http::HeaderValue;
/// use tweet_notify::notify::Notifier;
/// use tweet_notify::purchase::PurchaseEvent;
/// use tweet_notify::transport::ReqwestClient;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let notifier = Notifier::new(
///     ReqwestClient::new(),
///     Url::parse("http://localhost:5001/api/post-tweet")?,
///     HeaderValue::from_static("secret"),
/// );
///
/// let purchase = PurchaseEvent::new(500_000.0).with_product_name("Land at 2 Seasons");
/// notifier.notify_purchase(&purchase).await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Notifier<H> {
    client: H,
    endpoint: Url,
    api_key: HeaderValue,
    custom_message: Option<String>,
}

impl<H> Notifier<H> {
    /// Creates a notifier posting to `endpoint` with the given API key.
    ///
    /// Purchase announcements carry the default celebratory message.
    #[must_use]
    pub fn new(client: H, endpoint: Url, mut api_key: HeaderValue) -> Self {
        api_key.set_sensitive(true);

        Self {
            client,
            endpoint,
            api_key,
            custom_message: Some(defaults::CUSTOM_MESSAGE.to_string()),
        }
    }

    /// Sets the message appended to purchase tweets; `None` omits it.
    #[must_use]
    pub fn with_custom_message(mut self, message: Option<String>) -> Self {
        self.custom_message = message;
        self
    }
}

impl<H: HttpClient> Notifier<H> {
    /// Sends `body` once and decodes the API's answer.
    ///
    /// The body is decoded whatever the HTTP status, since the API
    /// reports rejections as JSON with a non-2xx status.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Transport`] if no response arrives and
    /// [`NotifyError::Decode`] if the body is not a tweet API answer.
    pub async fn send(&self, body: &TweetRequest) -> Result<TweetResult, NotifyError> {
        let request = ApiRequest::json(self.endpoint.clone(), self.api_key.clone(), body)
            .map_err(NotifyError::Encode)?;

        tracing::debug!(kind = body.kind(), endpoint = %self.endpoint, "Calling tweet API");
        let response = self.client.request(request).await?;
        tracing::debug!(status = %response.status, "Tweet API responded");

        serde_json::from_slice(&response.body).map_err(|source| NotifyError::Decode {
            status: response.status,
            source,
        })
    }

    /// Posts `text` as a tweet and returns the API's answer.
    ///
    /// An answer with `success: false` is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the API is unreachable or answers with
    /// something other than a tweet result.
    pub async fn post_tweet(&self, text: &str) -> Result<TweetResult, NotifyError> {
        self.send(&TweetRequest::tweet(text)).await
    }

    /// Announces a purchase, logging the outcome instead of returning it.
    pub async fn notify_purchase(&self, purchase: &PurchaseEvent) {
        let body = TweetRequest::purchase(purchase, self.custom_message.clone());

        match self.send(&body).await {
            Ok(TweetResult {
                success: true,
                tweet_url,
                ..
            }) => {
                tracing::info!(
                    tweet_url = tweet_url.as_deref().unwrap_or("unknown"),
                    "Purchase tweet posted"
                );
            }
            Ok(result) => {
                tracing::warn!(
                    error = result.error.as_deref().unwrap_or("unspecified"),
                    "Tweet API rejected purchase tweet"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Error calling tweet API for purchase");
            }
        }
    }

    /// Announces the purchase described by a payment-processor webhook.
    ///
    /// See [`derive_from_webhook`] for how fields are picked.
    pub async fn notify_webhook(&self, payload: &serde_json::Value) {
        let purchase = derive_from_webhook(payload);
        tracing::debug!(?purchase, "Derived purchase from webhook payload");
        self.notify_purchase(&purchase).await;
    }
}

impl<H: HttpClient + Clone + 'static> Notifier<H> {
    /// Announces a purchase on a detached tokio task.
    ///
    /// The caller may drop the returned handle; the announcement still
    /// runs to completion and its outcome is only visible in the logs.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn_notify_purchase(&self, purchase: PurchaseEvent) -> JoinHandle<()> {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier.notify_purchase(&purchase).await;
        })
    }
}
