//! Errors raised while assembling the notifier configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Why no usable configuration could be produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file given with `--config` could not be read.
    #[error("Cannot read config file '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has keys outside `[api]`/`[purchase]`.
    #[error("Config file is not valid: {0}")]
    Parse(#[from] toml::de::Error),

    /// `init` could not write its template.
    #[error("Cannot write config template to '{}': {source}", path.display())]
    WriteTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of `--api-key`, `API_SECRET_KEY` or `api.api_key` supplied a key.
    #[error(
        "No tweet API key configured. Use --api-key, set API_SECRET_KEY, \
         or set api_key under [api] in the config file"
    )]
    MissingApiKey,

    /// The key cannot travel in the `X-API-Key` header.
    #[error("API key is not a valid header value: {reason}")]
    InvalidApiKey { reason: String },

    /// The tweet API endpoint does not parse or is not http(s).
    #[error("Invalid tweet API URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// A request timeout of zero seconds was given.
    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
}
