//! Mastodon REST API types.
//!
//! Only the fields the feed needs are modelled; everything else in the
//! responses is ignored.

use serde::Deserialize;

/// OAuth redirect URI for out-of-band authorization.
pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

/// OAuth scope requested by this tool.
pub const SCOPE: &str = "read";

/// Client credentials returned by `POST /api/v1/apps`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Response of `POST /oauth/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body returned by Mastodon on failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// `user` for local accounts, `user@domain` for remote ones.
    pub acct: String,
    pub display_name: String,
}

impl Account {
    /// The part of `acct` before the first `@`.
    pub fn local_part(&self) -> &str {
        self.acct.split('@').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Gifv,
    Video,
    Audio,
    #[serde(other)]
    Unknown,
}

/// Width and height of one rendition of an attachment.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Dimensions {
    pub width: Option<u64>,
    pub height: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaMeta {
    pub small: Option<Dimensions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaAttachment {
    pub r#type: MediaType,
    pub url: Option<String>,
    pub preview_url: Option<String>,
    pub description: Option<String>,
    pub meta: Option<MediaMeta>,
}

impl MediaAttachment {
    /// Dimensions of the `small` rendition, if the instance reported them.
    pub fn small_dimensions(&self) -> Dimensions {
        self.meta
            .as_ref()
            .and_then(|meta| meta.small)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollOption {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Poll {
    pub options: Vec<PollOption>,
}

/// A status from the home timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: String,
    /// RFC 3339 timestamp, kept as the instance sent it.
    pub created_at: String,
    pub account: Account,
    pub content: String,
    #[serde(default)]
    pub reblog: Option<Box<Status>>,
    #[serde(default)]
    pub media_attachments: Vec<MediaAttachment>,
    #[serde(default)]
    pub poll: Option<Poll>,
}

impl Status {
    /// The status whose content should be shown: the boosted one, or self.
    pub fn target(&self) -> &Status {
        self.reblog.as_deref().unwrap_or(self)
    }

    pub fn is_boost(&self) -> bool {
        self.reblog.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_status() {
        let json = r#"{
            "id": "123",
            "created_at": "2024-01-15T10:30:00.000Z",
            "account": {"acct": "user", "display_name": "User"},
            "content": "<p>Hello</p>",
            "reblog": null,
            "media_attachments": [],
            "poll": null
        }"#;

        let status: Status = serde_json::from_str(json).unwrap();
        assert_eq!(status.id, "123");
        assert_eq!(status.created_at, "2024-01-15T10:30:00.000Z");
        assert!(!status.is_boost());
        assert_eq!(status.target().id, "123");
    }

    #[test]
    fn test_deserialize_boost_targets_inner_status() {
        let json = r#"{
            "id": "200",
            "created_at": "2024-01-15T10:30:00.000Z",
            "account": {"acct": "booster", "display_name": "Booster"},
            "content": "",
            "reblog": {
                "id": "100",
                "created_at": "2024-01-14T08:00:00.000Z",
                "account": {"acct": "alice@example.org", "display_name": "Alice"},
                "content": "<p>Original</p>"
            }
        }"#;

        let status: Status = serde_json::from_str(json).unwrap();
        assert!(status.is_boost());
        assert_eq!(status.target().id, "100");
        assert_eq!(status.target().account.local_part(), "alice");
    }

    #[test]
    fn test_missing_content_is_an_error() {
        let json = r#"{
            "id": "1",
            "created_at": "2024-01-15T10:30:00.000Z",
            "account": {"acct": "user", "display_name": "User"}
        }"#;
        assert!(serde_json::from_str::<Status>(json).is_err());
    }

    #[test]
    fn test_unknown_media_type() {
        let json = r#"{"type": "hologram", "url": "https://x/y"}"#;
        let media: MediaAttachment = serde_json::from_str(json).unwrap();
        assert_eq!(media.r#type, MediaType::Unknown);
    }

    #[test]
    fn test_small_dimensions() {
        let json = r#"{
            "type": "image",
            "url": "https://files.example/a.png",
            "meta": {"small": {"width": 400, "height": 300, "size": "400x300"}}
        }"#;
        let media: MediaAttachment = serde_json::from_str(json).unwrap();
        let dims = media.small_dimensions();
        assert_eq!(dims.width, Some(400));
        assert_eq!(dims.height, Some(300));
    }

    #[test]
    fn test_small_dimensions_absent() {
        let json = r#"{"type": "image", "url": "https://files.example/a.png", "meta": null}"#;
        let media: MediaAttachment = serde_json::from_str(json).unwrap();
        let dims = media.small_dimensions();
        assert!(dims.width.is_none());
        assert!(dims.height.is_none());
    }

    #[test]
    fn test_local_part_without_domain() {
        let account = Account {
            acct: "bob".to_string(),
            display_name: "Bob".to_string(),
        };
        assert_eq!(account.local_part(), "bob");
    }
}
