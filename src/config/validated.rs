//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;
use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// Environment variables are already folded into the CLI values by clap.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Tweet API endpoint
    pub url: Url,

    /// Secret for the X-API-Key header, marked sensitive
    pub api_key: HeaderValue,

    /// Upper bound on a single request
    pub timeout: Duration,

    /// Message appended to purchase tweets
    pub custom_message: Option<String>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ url: {}, api_key: <redacted>, timeout: {}s, custom_message: {} }}",
            self.url,
            self.timeout.as_secs(),
            self.custom_message.as_deref().unwrap_or("none"),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (and the environment variables behind them) take
    /// precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is missing, empty or not a valid header value
    /// - The URL is invalid
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let api_key = Self::resolve_api_key(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let custom_message = Self::resolve_custom_message(toml);

        Ok(Self {
            url,
            api_key,
            timeout,
            custom_message,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI/env > TOML > default
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.url.as_deref()))
            .unwrap_or(defaults::ENDPOINT);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidEndpoint {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                url: url_str.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_api_key(cli: &Cli, toml: Option<&TomlConfig>) -> Result<HeaderValue, ConfigError> {
        let key = cli
            .api_key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.api_key.as_deref()))
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut value = HeaderValue::from_str(key).map_err(|e| ConfigError::InvalidApiKey {
            reason: e.to_string(),
        })?;
        value.set_sensitive(true);

        Ok(value)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.api.timeout))
            .unwrap_or(defaults::REQUEST_TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_custom_message(toml: Option<&TomlConfig>) -> Option<String> {
        match toml.and_then(|t| t.purchase.custom_message.as_deref()) {
            Some("") => None,
            Some(message) => Some(message.to_string()),
            None => Some(defaults::CUSTOM_MESSAGE.to_string()),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::WriteTemplate {
        path: path.to_path_buf(),
        source: e,
    })
}
