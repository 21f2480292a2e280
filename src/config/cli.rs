//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::purchase::PurchaseEvent;

/// tweet-notify: announce purchases through a tweet-posting API
///
/// Sends purchase announcements and plain tweets to an external API
/// that posts them to Twitter/X.
#[derive(Debug, Parser)]
#[command(name = "tweet-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Tweet API endpoint URL
    #[arg(long, global = true, env = "TWITTER_API_URL")]
    pub url: Option<String>,

    /// Secret sent in the X-API-Key header
    #[arg(long = "api-key", global = true, env = "API_SECRET_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for tweet-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "tweet-notify.toml")]
        output: PathBuf,
    },

    /// Post a tweet with the given text
    Tweet {
        /// Text of the tweet
        text: String,
    },

    /// Announce a completed purchase
    Purchase(PurchaseArgs),

    /// Announce the purchase described by a payment webhook payload
    Webhook {
        /// JSON payload file, or '-' for stdin
        #[arg(value_name = "FILE")]
        payload: PathBuf,
    },
}

/// Purchase details given on the command line.
#[derive(Debug, Clone, Args)]
pub struct PurchaseArgs {
    /// Customer name
    #[arg(long)]
    pub customer: Option<String>,

    /// Product name
    #[arg(long)]
    pub product: Option<String>,

    /// Purchase amount
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Currency code
    #[arg(long, default_value = "NGN")]
    pub currency: String,

    /// Purchase location
    #[arg(long)]
    pub location: Option<String>,
}

impl From<&PurchaseArgs> for PurchaseEvent {
    fn from(args: &PurchaseArgs) -> Self {
        Self {
            customer_name: args.customer.clone(),
            product_name: args.product.clone(),
            amount: args.amount,
            currency: args.currency.clone(),
            location: args.location.clone(),
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
