//! Mastodon API access.
//!
//! This module covers app registration, the OAuth code exchange and the
//! home timeline.

pub mod client;
pub mod types;

pub use client::{authorization_url, MastodonClient};
pub use types::{
    Account, ApiError, AppCredentials, Dimensions, MediaAttachment, MediaMeta, MediaType, Poll,
    PollOption, Status, TokenResponse, OOB_REDIRECT_URI, SCOPE,
};
