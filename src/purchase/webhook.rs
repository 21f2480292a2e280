//! Mapping from payment-processor webhook payloads to purchase events.

use serde_json::Value;

use super::PurchaseEvent;
use super::currency::DEFAULT_CURRENCY;
use super::event::coerce_amount;

/// Builds a [`PurchaseEvent`] from a loosely structured webhook payload.
///
/// Each field is taken from the first source that holds a usable value:
///
/// | Field | Sources, in order |
/// |---|---|
/// | `customer_name` | `customer.name`, `customer_name`, `customer_email` |
/// | `product_name` | `product_name`, `product.name`, `description` |
/// | `amount` | `amount`, `total`, then `0` |
/// | `currency` | `currency`, then `NGN` |
/// | `location` | `shipping_address.city`, `shipping.city`, then `""` |
///
/// Empty strings and a zero `amount` count as missing. Amounts may be
/// numbers or numeric strings. This never fails: a payload that is not even an object yields
/// an anonymous zero-amount purchase.
#[must_use]
pub fn derive_from_webhook(payload: &Value) -> PurchaseEvent {
    PurchaseEvent {
        customer_name: customer_name(payload),
        product_name: product_name(payload),
        amount: amount(payload),
        currency: currency(payload),
        location: Some(location(payload)),
    }
}

fn customer_name(payload: &Value) -> Option<String> {
    text_at(payload, &["customer", "name"])
        .or_else(|| text_at(payload, &["customer_name"]))
        .or_else(|| text_at(payload, &["customer_email"]))
}

fn product_name(payload: &Value) -> Option<String> {
    text_at(payload, &["product_name"])
        .or_else(|| text_at(payload, &["product", "name"]))
        .or_else(|| text_at(payload, &["description"]))
}

fn amount(payload: &Value) -> f64 {
    ["amount", "total"]
        .into_iter()
        .find_map(|key| {
            payload
                .get(key)
                .and_then(coerce_amount)
                .filter(|amount| *amount != 0.0)
        })
        .unwrap_or(0.0)
}

fn currency(payload: &Value) -> String {
    text_at(payload, &["currency"]).unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

fn location(payload: &Value) -> String {
    text_at(payload, &["shipping_address", "city"])
        .or_else(|| text_at(payload, &["shipping", "city"]))
        .unwrap_or_default()
}

/// Follows `path` through nested objects and returns a non-empty string.
fn text_at(payload: &Value, path: &[&str]) -> Option<String> {
    path.iter()
        .try_fold(payload, |value, key| value.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
