//! Conversion of timeline statuses into feed entries.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::mastodon::{MediaAttachment, MediaType, Poll, Status};

/// Maximum title length in characters, ellipsis included.
pub const MAX_TITLE_LENGTH: usize = 80;

/// Appended to titles that were cut.
pub const ELLIPSIS: &str = "...";

/// Title used when the content has no text.
pub const EMPTY_TITLE: &str = "(no title)";

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p>\s*<p>").expect("valid paragraph regex"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break regex"));
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("valid tag regex"));

/// One entry of the generated feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Permalink, used as both the Atom id and the link.
    pub id: String,
    pub title: String,
    pub author: String,
    /// `created_at` exactly as the instance sent it.
    pub published: String,
    /// HTML body.
    pub content: String,
    pub link: String,
}

impl FeedEntry {
    /// Build the entry for `status` as seen on `instance`.
    pub fn from_status(instance: &str, status: &Status) -> Self {
        let target = status.target();
        let permalink = permalink(instance, &target.account.acct, &target.id);

        let mut content = String::new();
        if status.is_boost() {
            let _ = write!(content, "[boosting {}] <br>", target.account.local_part());
        }
        content.push_str(&target.content);

        let title = make_title(&strip_control_chars(&content));

        for media in &target.media_attachments {
            content.push_str(&media_markup(media));
        }
        if let Some(poll) = &target.poll {
            content.push_str(&poll_markup(poll));
        }

        Self {
            id: permalink.clone(),
            title,
            author: status.account.display_name.clone(),
            published: status.created_at.clone(),
            content: strip_control_chars(&content),
            link: permalink,
        }
    }
}

/// Convert every status, keeping timeline order.
pub fn entries_from_statuses(instance: &str, statuses: &[Status]) -> Vec<FeedEntry> {
    statuses
        .iter()
        .map(|status| FeedEntry::from_status(instance, status))
        .collect()
}

/// `https://<instance>/@<acct>/<status_id>`
pub fn permalink(instance: &str, acct: &str, status_id: &str) -> String {
    format!("https://{instance}/@{acct}/{status_id}")
}

/// Derive a plain-text title from status HTML.
pub fn make_title(html: &str) -> String {
    let text = PARAGRAPH_BREAK.replace_all(html, " ");
    let text = LINE_BREAK.replace_all(&text, " ");
    let text = TAG.replace_all(&text, "");

    if text.trim().is_empty() {
        return EMPTY_TITLE.to_string();
    }
    truncate_title(&text)
}

fn truncate_title(text: &str) -> String {
    if text.chars().count() <= MAX_TITLE_LENGTH {
        return text.to_string();
    }

    let keep = MAX_TITLE_LENGTH - ELLIPSIS.chars().count();
    let mut title: String = text.chars().take(keep).collect();
    title.truncate(title.trim_end().len());
    title.push_str(ELLIPSIS);
    title
}

/// Markup for one attachment; empty for types that have no inline form.
pub fn media_markup(media: &MediaAttachment) -> String {
    let url = escape_html(media.url.as_deref().unwrap_or_default());

    match media.r#type {
        MediaType::Image => {
            let dims = media.small_dimensions();
            let height = dims.height.map(|h| h.to_string()).unwrap_or_default();
            let width = dims.width.map(|w| w.to_string()).unwrap_or_default();
            let alt = escape_html(media.description.as_deref().unwrap_or_default());
            format!(r#"<img src="{url}" height="{height}" width="{width}" alt="{alt}" title="{alt}">"#)
        }
        MediaType::Gifv => format!(r#"<video src="{url}" autoplay loop></video>"#),
        MediaType::Video => {
            let poster = escape_html(media.preview_url.as_deref().unwrap_or_default());
            format!(r#"<video src="{url}" controls poster="{poster}" preload="none"></video>"#)
        }
        MediaType::Audio | MediaType::Unknown => String::new(),
    }
}

/// Unordered list of the poll's option titles.
pub fn poll_markup(poll: &Poll) -> String {
    let mut html = String::from("<ul>");
    for option in &poll.options {
        let _ = write!(html, "<li>{}</li>", escape_html(&option.title));
    }
    html.push_str("</ul>");
    html
}

fn is_other_category(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// Remove every character in Unicode general category C.
pub fn strip_control_chars(s: &str) -> String {
    s.chars().filter(|&c| !is_other_category(c)).collect()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
