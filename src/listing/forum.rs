//! Listing parser for the forum search-result markup.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::entry::{EntryKind, EntryStub, ListingPage};

use super::ListingParser;

/// Row marker classes distinguishing topics from post/comment replies.
const TOPIC_ROW_CLASS: &str = "topicrow";
const POST_ROW_CLASS: &str = "postrow";

/// Literal, case-sensitive label of the next-page link as it appears in
/// the source markup. A renamed label ends traversal at that page.
const NEXT_LABEL: &str = "Next";

/// Parses forum search-result listings and their detail pages.
///
/// Listing structure: a `table.forumsearchresults` container whose
/// `topicrow`/`postrow` rows each carry one link to the entry's detail
/// page, with a `div.pagination` holding the "Next" link. Detail pages
/// carry their full text in `div.partial_entry`.
pub struct ForumListingParser {
    results_table: Selector,
    row: Selector,
    row_link: Selector,
    pagination: Selector,
    anchor: Selector,
    detail_region: Selector,
}

impl Default for ForumListingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ForumListingParser {
    /// Creates the parser with its static selector set.
    ///
    /// # Panics
    ///
    /// Panics if any of the static selector literals fails to parse.
    /// This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let parse = |s: &str| Selector::parse(s).expect("static selector literal must parse");
        Self {
            results_table: parse("table.forumsearchresults"),
            row: parse("tr"),
            row_link: parse("a[href]"),
            pagination: parse("div.pagination"),
            anchor: parse("a"),
            detail_region: parse("div.partial_entry"),
        }
    }

    fn extract_stubs(&self, table: ElementRef<'_>, page_url: &Url) -> Vec<EntryStub> {
        let mut stubs = Vec::new();
        for row in table.select(&self.row) {
            let is_topic = row.value().classes().any(|c| c == TOPIC_ROW_CLASS);
            let is_post = row.value().classes().any(|c| c == POST_ROW_CLASS);
            if !is_topic && !is_post {
                continue;
            }

            // Rows without an embedded link are malformed, not an error.
            let Some(link) = row.select(&self.row_link).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let Ok(detail_url) = page_url.join(href) else {
                debug!(href, "skipping row with unresolvable link");
                continue;
            };

            stubs.push(EntryStub {
                kind: if is_topic {
                    EntryKind::Topic
                } else {
                    EntryKind::Comment
                },
                short_text: joined_text(link),
                detail_url,
            });
        }
        stubs
    }

    fn extract_next_page(&self, document: &Html, page_url: &Url) -> Option<Url> {
        let pagination = document.select(&self.pagination).next()?;
        pagination
            .select(&self.anchor)
            .find(|a| a.text().any(|t| t.contains(NEXT_LABEL)))
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| page_url.join(href).ok())
    }
}

impl ListingParser for ForumListingParser {
    fn parse_listing(&self, html: &str, page_url: &Url) -> ListingPage {
        let document = Html::parse_document(html);

        let Some(table) = document.select(&self.results_table).next() else {
            warn!(url = %page_url, "no forum search results table found");
            return ListingPage::default();
        };

        ListingPage {
            stubs: self.extract_stubs(table, page_url),
            next_page: self.extract_next_page(&document, page_url),
        }
    }

    fn extract_detail_text(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        if let Some(region) = document.select(&self.detail_region).next() {
            return joined_text(region);
        }
        // Last resort: the whole document's visible text. Noisy, but
        // non-empty whenever the page rendered anything at all.
        joined_text(document.root_element())
    }
}

/// Visible text of an element with whitespace collapsed: runs of
/// whitespace inside and between text nodes become single spaces, ends
/// trimmed.
fn joined_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://forum.example.com/SearchForums?q=ai+trip").unwrap()
    }

    fn listing_html(pagination: &str) -> String {
        format!(
            r#"<html><body>
            <table class="forumsearchresults">
              <tr class="headerrow"><td>Results</td></tr>
              <tr class="topicrow"><td><a href="/ShowTopic-t101">AI itinerary for Rome</a></td></tr>
              <tr class="postrow"><td><a href="https://other.example.com/ShowPost-p7">We used an AI planner</a></td></tr>
              <tr class="topicrow"><td>row without a link</td></tr>
              <tr class="topicrow"><td><a href="/ShowTopic-t102">Beach holiday tips</a></td></tr>
            </table>
            {pagination}
            </body></html>"#
        )
    }

    #[test]
    fn test_parse_listing_extracts_stubs_in_row_order() {
        let parser = ForumListingParser::new();
        let page = parser.parse_listing(&listing_html(""), &page_url());

        assert_eq!(page.stubs.len(), 3);
        assert_eq!(page.stubs[0].kind, EntryKind::Topic);
        assert_eq!(page.stubs[0].short_text, "AI itinerary for Rome");
        assert_eq!(page.stubs[1].kind, EntryKind::Comment);
        assert_eq!(page.stubs[2].kind, EntryKind::Topic);
        assert_eq!(page.stubs[2].short_text, "Beach holiday tips");
    }

    #[test]
    fn test_parse_listing_resolves_relative_hrefs_to_absolute_urls() {
        let parser = ForumListingParser::new();
        let page = parser.parse_listing(&listing_html(""), &page_url());

        assert_eq!(
            page.stubs[0].detail_url.as_str(),
            "https://forum.example.com/ShowTopic-t101"
        );
        // Absolute hrefs pass through untouched.
        assert_eq!(
            page.stubs[1].detail_url.as_str(),
            "https://other.example.com/ShowPost-p7"
        );
    }

    #[test]
    fn test_parse_listing_skips_rows_without_links() {
        let parser = ForumListingParser::new();
        let page = parser.parse_listing(&listing_html(""), &page_url());

        assert!(
            page.stubs
                .iter()
                .all(|s| !s.short_text.contains("without a link"))
        );
    }

    #[test]
    fn test_parse_listing_missing_container_yields_empty_page() {
        let parser = ForumListingParser::new();
        let page = parser.parse_listing(
            "<html><body><p>Please verify you are human.</p></body></html>",
            &page_url(),
        );

        assert!(page.stubs.is_empty());
        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_next_page_resolved_from_pagination_link() {
        let parser = ForumListingParser::new();
        let html = listing_html(
            r#"<div class="pagination"><a href="/SearchForums?q=ai+trip&amp;o=20">Next &raquo;</a></div>"#,
        );
        let page = parser.parse_listing(&html, &page_url());

        assert_eq!(
            page.next_page.as_ref().map(Url::as_str),
            Some("https://forum.example.com/SearchForums?q=ai+trip&o=20")
        );
    }

    #[test]
    fn test_next_label_match_is_case_sensitive() {
        let parser = ForumListingParser::new();
        let html =
            listing_html(r#"<div class="pagination"><a href="/SearchForums?o=20">next</a></div>"#);
        let page = parser.parse_listing(&html, &page_url());

        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_next_link_without_href_is_ignored() {
        let parser = ForumListingParser::new();
        let html = listing_html(r#"<div class="pagination"><a>Next</a></div>"#);
        let page = parser.parse_listing(&html, &page_url());

        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_no_pagination_element_means_no_next_page() {
        let parser = ForumListingParser::new();
        let page = parser.parse_listing(&listing_html(""), &page_url());

        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_detail_text_prefers_designated_region() {
        let parser = ForumListingParser::new();
        let html = r#"<html><body>
            <div class="navigation">Forums Home</div>
            <div class="partial_entry">We built our
              whole   itinerary <b>with AI</b> suggestions.
            </div>
        </body></html>"#;

        assert_eq!(
            parser.extract_detail_text(html),
            "We built our whole itinerary with AI suggestions."
        );
    }

    #[test]
    fn test_detail_text_falls_back_to_whole_document() {
        let parser = ForumListingParser::new();
        let html = "<html><body><h1>Topic</h1><p>Plain reply text.</p></body></html>";

        let text = parser.extract_detail_text(html);
        assert!(text.contains("Topic"));
        assert!(text.contains("Plain reply text."));
    }

    #[test]
    fn test_detail_text_empty_document_yields_empty_string() {
        let parser = ForumListingParser::new();
        assert_eq!(parser.extract_detail_text("<html><body></body></html>"), "");
    }
}
