//! tweet-notify: purchase announcements through a tweet-posting API
//!
//! A library for turning purchases and payment webhooks into calls to an
//! external API that posts tweets, without letting that API's failures
//! leak into the purchase flow.

pub mod config;
pub mod notify;
pub mod purchase;
pub mod transport;
