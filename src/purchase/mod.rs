//! Purchase events and the helpers that shape them for a tweet.
//!
//! - [`PurchaseEvent`]: a completed purchase as the application sees it
//! - [`format_currency`]: renders an amount the way the tweet shows it
//! - [`derive_from_webhook`]: best-effort mapping from a payment-processor payload

mod currency;
mod event;
mod webhook;

#[cfg(test)]
mod webhook_tests;

pub use currency::{DEFAULT_CURRENCY, format_currency};
pub use event::PurchaseEvent;
pub use webhook::derive_from_webhook;
