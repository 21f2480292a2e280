//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Tweet API connection section
    #[serde(default)]
    pub api: ApiSection,

    /// Purchase announcement section
    #[serde(default)]
    pub purchase: PurchaseSection,
}

/// Tweet API connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// Endpoint URL
    pub url: Option<String>,

    /// Secret sent in the X-API-Key header
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// Purchase announcement section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurchaseSection {
    /// Message appended to purchase tweets; empty disables it
    pub custom_message: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# tweet-notify Configuration File
#
# Precedence: command-line flags, then environment variables,
# then this file, then built-in defaults.

[api]
# Tweet API endpoint (env: TWITTER_API_URL)
# url = "http://localhost:5001/api/post-tweet"

# Secret sent in the X-API-Key header (required, env: API_SECRET_KEY)
# api_key = "your_secret_key_here"

# Request timeout in seconds (default: 10)
# timeout = 10

[purchase]
# Message appended to purchase tweets (default: "🎉", "" to omit)
# custom_message = "🎉"
"#
    .to_string()
}
