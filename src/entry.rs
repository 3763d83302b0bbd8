//! Data model for listing entries.
//!
//! An [`EntryStub`] is the summarized representation of one listing row;
//! it lives only long enough to be handed to the detail resolver, which
//! turns it into a [`ResolvedEntry`]. Resolved entries accumulate for the
//! whole crawl and are what filtering and export operate on.

use std::fmt;

use serde::Serialize;
use url::Url;

/// Whether a listing row is a forum topic or a comment/post reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Topic,
    Comment,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topic => write!(f, "Topic"),
            Self::Comment => write!(f, "Comment"),
        }
    }
}

/// One listing row before its detail page has been fetched.
///
/// `detail_url` is always absolute: relative hrefs are joined against the
/// URL of the listing page that produced them at extraction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStub {
    pub kind: EntryKind,
    /// Text visible directly in the listing row (the link's visible text).
    pub short_text: String,
    pub detail_url: Url,
}

/// An entry after detail resolution.
///
/// `text` is the detail page's extracted full text when non-empty after
/// trimming, otherwise the stub's short text. Serde field names match the
/// CSV column order: `type`, `text`, `detail_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub text: String,
    pub detail_url: Url,
}

/// Everything extracted from one listing page: its entry stubs in row
/// order plus the next-page URL when a "Next" link was present.
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    pub stubs: Vec<EntryStub>,
    pub next_page: Option<Url>,
}
