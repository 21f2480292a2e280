//! Notifier client for the tweet API.
//!
//! This module provides:
//! - Request bodies ([`TweetRequest`], [`PurchaseFields`])
//! - The parsed API answer ([`TweetResult`])
//! - The client itself ([`Notifier`]), with a best-effort purchase
//!   announcement and a direct tweet call that reports failures
//! - Errors surfaced by the direct call ([`NotifyError`])

mod error;
mod notifier;
mod request;
mod result;


pub use error::NotifyError;
pub use notifier::Notifier;
pub use request::{PurchaseFields, TweetRequest};
pub use result::TweetResult;
