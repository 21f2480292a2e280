//! JSON bodies sent to the tweet API.

use serde::Serialize;

use crate::purchase::PurchaseEvent;

/// Body of a request to the tweet API.
///
/// Serialized without a tag, so the two shapes are
/// `{"purchase": {...}, "custom_message": "..."}` and `{"tweet": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TweetRequest {
    /// Let the API compose a tweet from purchase details.
    Purchase {
        /// Details shown in the tweet
        purchase: PurchaseFields,
        /// Text appended by the API after the composed tweet
        #[serde(skip_serializing_if = "Option::is_none")]
        custom_message: Option<String>,
    },

    /// Post the given text as-is.
    Tweet {
        /// Tweet text
        tweet: String,
    },
}

/// Display-ready purchase details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseFields {
    /// Customer name, `"A customer"` when unknown
    pub user_name: String,
    /// Product name, `"a product"` when unknown
    pub product: String,
    /// Amount already rendered with its currency
    pub amount: String,
    /// Location, empty when unknown
    pub location: String,
}

impl From<&PurchaseEvent> for PurchaseFields {
    fn from(purchase: &PurchaseEvent) -> Self {
        Self {
            user_name: purchase.user_name().to_string(),
            product: purchase.product().to_string(),
            amount: purchase.formatted_amount(),
            location: purchase.location().to_string(),
        }
    }
}

impl TweetRequest {
    /// Builds the purchase shape for `purchase`.
    #[must_use]
    pub fn purchase(purchase: &PurchaseEvent, custom_message: Option<String>) -> Self {
        Self::Purchase {
            purchase: PurchaseFields::from(purchase),
            custom_message,
        }
    }

    /// Builds the plain tweet shape.
    #[must_use]
    pub fn tweet(text: impl Into<String>) -> Self {
        Self::Tweet { tweet: text.into() }
    }

    /// Short name of the request shape, used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Purchase { .. } => "purchase",
            Self::Tweet { .. } => "tweet",
        }
    }
}
