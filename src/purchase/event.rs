//! The purchase event announced by the notifier.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::currency::{DEFAULT_CURRENCY, format_currency};

/// Name shown when the customer is unknown.
pub(crate) const ANONYMOUS_CUSTOMER: &str = "A customer";

/// Product shown when the product is unknown.
pub(crate) const UNKNOWN_PRODUCT: &str = "a product";

/// A completed purchase.
///
/// Built per call and consumed by the notifier. Deserializes from both
/// `snake_case` and `camelCase` field names; `amount` accepts a number or
/// a numeric string, and `currency` defaults to `NGN`.
///
/// # Example
///
/// ```
/// use tweet_notify::purchase::PurchaseEvent;
///
/// let purchase = PurchaseEvent::new(500_000.0)
///     .with_customer_name("John Doe")
///     .with_product_name("Land at 2 Seasons")
///     .with_location("Abeokuta");
///
/// assert_eq!(purchase.user_name(), "John Doe");
/// assert_eq!(purchase.formatted_amount(), "₦500,000");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseEvent {
    /// Display name of the buyer
    #[serde(default, alias = "customerName")]
    pub customer_name: Option<String>,

    /// Name of the purchased product
    #[serde(default, alias = "productName")]
    pub product_name: Option<String>,

    /// Purchase amount in `currency` units
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,

    /// ISO currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Where the purchase was made or shipped to
    #[serde(default)]
    pub location: Option<String>,
}

impl PurchaseEvent {
    /// Creates a purchase of `amount` in the default currency with no
    /// other details.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self {
            customer_name: None,
            product_name: None,
            amount,
            currency: default_currency(),
            location: None,
        }
    }

    /// Sets the customer name.
    #[must_use]
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Sets the product name.
    #[must_use]
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Customer name for the tweet, `"A customer"` when unknown or empty.
    #[must_use]
    pub fn user_name(&self) -> &str {
        non_empty(self.customer_name.as_deref()).unwrap_or(ANONYMOUS_CUSTOMER)
    }

    /// Product for the tweet, `"a product"` when unknown or empty.
    #[must_use]
    pub fn product(&self) -> &str {
        non_empty(self.product_name.as_deref()).unwrap_or(UNKNOWN_PRODUCT)
    }

    /// Location for the tweet, empty when unknown.
    #[must_use]
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    /// Amount rendered with [`format_currency`].
    #[must_use]
    pub fn formatted_amount(&self) -> String {
        format_currency(self.amount, &self.currency)
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Interprets a JSON value as an amount.
///
/// Numbers are taken as-is; strings are trimmed and parsed. Anything else,
/// and any non-finite result, is rejected.
pub(crate) fn coerce_amount(value: &serde_json::Value) -> Option<f64> {
    let amount = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    amount.is_finite().then_some(amount)
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    coerce_amount(&value)
        .ok_or_else(|| D::Error::custom(format!("amount must be numeric-coercible, got {value}")))
}
