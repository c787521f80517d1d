//! Command-line interface definitions and parsing.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// What the invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Interactively obtain an access token.
    Setup,
    /// Generate the feed with the given access token.
    Generate { token: String },
}

/// mastodon-homefeed - turn your Mastodon home timeline into an Atom feed
#[derive(Parser, Debug)]
#[command(name = "mastodon-homefeed", version)]
#[command(about = "Generate an Atom feed from a Mastodon home timeline")]
#[command(group(ArgGroup::new("mode").required(true).args(["setup", "token"])))]
pub struct Args {
    /// The domain name of your instance, e.g. mastodon.social
    pub instance: String,

    /// Get an access token for an instance
    #[arg(long)]
    pub setup: bool,

    /// Generate feed for given access token
    #[arg(long)]
    pub token: Option<String>,

    /// Pathname for file output (./mastodon-homefeed.xml if omitted)
    #[arg(long = "output_file")]
    pub output_file: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn mode(&self) -> Mode {
        match &self.token {
            Some(token) if !self.setup => Mode::Generate {
                token: token.clone(),
            },
            _ => Mode::Setup,
        }
    }

    /// `--output_file`, falling back to the configured default.
    pub fn output_path(&self, default: &str) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(default))
    }
}
