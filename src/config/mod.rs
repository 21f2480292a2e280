//! Configuration layer for tweet-notify.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`PurchaseArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Environment variables** - `TWITTER_API_URL` and `API_SECRET_KEY`
//! 3. **TOML config file**
//! 4. **Built-in defaults**
//!
//! The API key has no default and must come from one of the first three sources.
//! The custom purchase message is TOML-only.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command, PurchaseArgs};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
