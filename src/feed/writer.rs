//! Atom serialization of the home feed.

use std::path::Path;

use atom_syndication::{Content, Entry, Feed, FixedDateTime, Link, Person, Text};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::FeedConfig;
use crate::error::{HomefeedError, Result};
use crate::feed::entry::FeedEntry;

/// Entries collected for one output file.
#[derive(Debug, Clone)]
pub struct HomeFeed {
    id: String,
    title: String,
    entries: Vec<FeedEntry>,
}

impl HomeFeed {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Empty feed with the configured id and title.
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.id.as_str(), config.title.as_str())
    }

    pub fn push(&mut self, entry: FeedEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the Atom document, stamped with `updated`.
    pub fn to_atom(&self, updated: DateTime<Utc>) -> Result<Feed> {
        let entries = self
            .entries
            .iter()
            .map(atom_entry)
            .collect::<Result<Vec<_>>>()?;

        let mut feed = Feed::default();
        feed.set_id(self.id.as_str());
        feed.set_title(Text::plain(self.title.as_str()));
        feed.set_updated(FixedDateTime::from(updated));
        feed.set_entries(entries);
        Ok(feed)
    }

    /// Serialize to UTF-8 Atom XML.
    pub fn render(&self, updated: DateTime<Utc>) -> Result<Vec<u8>> {
        let feed = self.to_atom(updated)?;
        feed.write_to(Vec::new())
            .map_err(|e| HomefeedError::Feed(e.to_string()))
    }

    /// Write the feed to `path`, replacing whatever is there.
    ///
    /// The document is rendered completely before the file is touched.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let xml = self.render(Utc::now())?;
        std::fs::write(path.as_ref(), xml)?;
        info!(
            "wrote {} entries to {}",
            self.entries.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

impl Extend<FeedEntry> for HomeFeed {
    fn extend<I: IntoIterator<Item = FeedEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

fn parse_timestamp(raw: &str) -> Result<FixedDateTime> {
    DateTime::parse_from_rfc3339(raw).map_err(|_| HomefeedError::Timestamp(raw.to_string()))
}

fn atom_entry(entry: &FeedEntry) -> Result<Entry> {
    let published = parse_timestamp(&entry.published)?;

    let mut author = Person::default();
    author.set_name(entry.author.as_str());

    let mut link = Link::default();
    link.set_href(entry.link.as_str());
    link.set_rel("alternate");

    let mut content = Content::default();
    content.set_content_type(Some("html".to_string()));
    content.set_value(Some(entry.content.clone()));

    let mut atom = Entry::default();
    atom.set_id(entry.id.as_str());
    atom.set_title(Text::html(entry.title.as_str()));
    atom.set_updated(published);
    atom.set_published(Some(published));
    atom.set_authors(vec![author]);
    atom.set_links(vec![link]);
    atom.set_content(Some(content));
    Ok(atom)
}
