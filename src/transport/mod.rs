//! HTTP transport for talking to the tweet API.
//!
//! This module provides:
//! - The tweet API call and its answer ([`ApiRequest`], [`ApiResponse`])
//! - The client abstraction used by the notifier ([`HttpClient`])
//! - The production implementation backed by reqwest ([`ReqwestClient`])

mod client;
mod error;
mod http;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{API_KEY_HEADER, ApiRequest, ApiResponse, HttpClient};
