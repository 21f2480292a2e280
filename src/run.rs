//! Command execution.
//!
//! Builds the notifier from the validated configuration and runs the
//! selected subcommand against it.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use tweet_notify::config::{Command, ValidatedConfig};
use tweet_notify::notify::{Notifier, NotifyError};
use tweet_notify::purchase::PurchaseEvent;
use tweet_notify::transport::{HttpClient, HttpError, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Path that selects standard input for the webhook payload.
const STDIN_PATH: &str = "-";

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// The direct tweet call failed before an answer was decoded.
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// The tweet API answered but refused the tweet.
    #[error("Tweet API rejected the tweet: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    /// The webhook payload could not be read.
    #[error("Failed to read webhook payload '{}': {source}", path.display())]
    PayloadRead {
        /// Payload path as given
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The webhook payload is not JSON.
    #[error("Webhook payload is not valid JSON: {0}")]
    PayloadParse(#[source] serde_json::Error),
}

/// Runs `command` with a notifier built from `config`.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be created
/// - A direct tweet fails or is rejected
/// - A webhook payload cannot be read or parsed
///
/// Purchase announcements never fail here; their outcome is only logged.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: &Command) -> Result<(), RunError> {
    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::Client)?;
    let notifier = Notifier::new(client, config.url, config.api_key)
        .with_custom_message(config.custom_message);

    dispatch(&notifier, command).await
}

async fn dispatch<H: HttpClient>(notifier: &Notifier<H>, command: &Command) -> Result<(), RunError> {
    match command {
        Command::Tweet { text } => post_tweet(notifier, text).await,
        Command::Purchase(args) => {
            notifier.notify_purchase(&PurchaseEvent::from(args)).await;
            Ok(())
        }
        Command::Webhook { payload } => {
            let payload = read_payload(payload)?;
            notifier.notify_webhook(&payload).await;
            Ok(())
        }
        // Handled by main before any configuration is loaded
        Command::Init { .. } => Ok(()),
    }
}

async fn post_tweet<H: HttpClient>(notifier: &Notifier<H>, text: &str) -> Result<(), RunError> {
    let result = notifier.post_tweet(text).await?;

    if !result.success {
        return Err(RunError::Rejected(result.error));
    }

    tracing::info!("{result}");
    if let Some(url) = result.tweet_url {
        println!("{url}");
    }
    Ok(())
}

fn read_payload(path: &Path) -> Result<serde_json::Value, RunError> {
    let read = if path == Path::new(STDIN_PATH) {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    };

    let content = read.map_err(|source| RunError::PayloadRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(RunError::PayloadParse)
}
