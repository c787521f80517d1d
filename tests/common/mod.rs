//! Shared helpers for the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

use mastodon_homefeed::config::HttpConfig;
use mastodon_homefeed::MastodonClient;

/// Hostname used for permalinks in tests.
pub const INSTANCE: &str = "instance.example";

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> MastodonClient {
    MastodonClient::with_base_url(server.uri(), &HttpConfig::default()).unwrap()
}

/// A plain status as the timeline endpoint returns it.
pub fn status(id: &str, acct: &str, content: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2024-01-15T10:30:00.000Z",
        "account": {"id": "1", "acct": acct, "display_name": format!("{acct} display")},
        "content": content,
        "reblog": null,
        "media_attachments": [],
        "poll": null,
        "visibility": "public"
    })
}

/// `booster` boosting `inner`.
pub fn boost(id: &str, booster: &str, inner: Value) -> Value {
    json!({
        "id": id,
        "created_at": "2024-01-16T09:00:00.000Z",
        "account": {"id": "2", "acct": booster, "display_name": format!("{booster} display")},
        "content": "",
        "reblog": inner,
        "media_attachments": [],
        "poll": null
    })
}
