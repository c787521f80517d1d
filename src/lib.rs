//! mastodon-homefeed
//!
//! Fetches a Mastodon home timeline and writes it out as an Atom feed, and
//! walks through the OAuth handshake needed to get an access token.

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod flow;
pub mod logging;
pub mod mastodon;

pub use config::Config;
pub use error::{HomefeedError, Result};
pub use feed::{FeedEntry, HomeFeed};
pub use flow::{run_generate, run_setup};
pub use mastodon::{MastodonClient, Status};
