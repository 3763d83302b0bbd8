//! Listing-page parsing.
//!
//! The traversal controller is decoupled from markup specifics through
//! the [`ListingParser`] trait; [`ForumListingParser`] is the
//! implementation for the forum search-result markup. Supporting a
//! second site means adding another implementation, not touching the
//! crawler.

mod forum;

pub use forum::ForumListingParser;

use url::Url;

use crate::entry::ListingPage;

/// Markup-specific extraction of listing rows and detail-page text.
///
/// Implementations are synchronous and self-contained: parsed HTML never
/// outlives a call, so no handle crosses an `await` point.
pub trait ListingParser {
    /// Parses one listing document into entry stubs (in row order) plus
    /// an optional next-page URL.
    ///
    /// `page_url` is the URL the document was fetched from; relative
    /// hrefs are resolved against it. A document without a recognizable
    /// results container yields an empty [`ListingPage`], not an error.
    fn parse_listing(&self, html: &str, page_url: &Url) -> ListingPage;

    /// Extracts the best-available full text from a detail document.
    ///
    /// Returns the designated content region's visible text when
    /// present, otherwise the whole document's visible text. May be
    /// empty; the detail resolver applies the short-text fallback.
    fn extract_detail_text(&self, html: &str) -> String;
}
