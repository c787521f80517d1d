//! Configuration module for mastodon-homefeed.
//!
//! Every field has a default, so running without a config file is the
//! normal case.

use serde::Deserialize;
use std::path::Path;

use crate::{HomefeedError, Result};

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("mastodon-homefeed/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Output feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Feed-level Atom id.
    #[serde(default = "default_feed_id")]
    pub id: String,
    /// Feed-level title.
    #[serde(default = "default_feed_title")]
    pub title: String,
    /// Output path used when `--output_file` is not given.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_feed_id() -> String {
    "https://mahnamahna.net/gen/mastodon-homefeed.xml".to_string()
}

fn default_feed_title() -> String {
    "mastodon home feed".to_string()
}

fn default_output_file() -> String {
    "mastodon-homefeed.xml".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            id: default_feed_id(),
            title: default_feed_title(),
            output_file: default_output_file(),
        }
    }
}

/// Application descriptor sent when registering with an instance.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Application name shown to the user on the authorize page.
    #[serde(default = "default_client_name")]
    pub client_name: String,
    /// Application website.
    #[serde(default = "default_website")]
    pub website: String,
}

fn default_client_name() -> String {
    "mastodon-homefeed-rss".to_string()
}

fn default_website() -> String {
    "https://mahnamahna.net/mastodon-homefeed-rss".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            website: default_website(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file, written in addition to stderr.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP client configuration.
    #[serde(default)]
    pub http: HttpConfig,
    /// Output feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Application descriptor.
    #[serde(default)]
    pub app: AppConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(HomefeedError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| HomefeedError::Config(format!("config parse error: {e}")))
    }
}
