//! Feed generation.
//!
//! [`entry`] turns statuses into entries, [`writer`] serializes them as Atom.

pub mod entry;
pub mod writer;

pub use entry::{
    entries_from_statuses, make_title, media_markup, permalink, poll_markup,
    strip_control_chars, FeedEntry, ELLIPSIS, EMPTY_TITLE, MAX_TITLE_LENGTH,
};
pub use writer::HomeFeed;
