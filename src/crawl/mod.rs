//! Page-by-page traversal of the search-result listing.

use tracing::{debug, info, warn};
use url::Url;

use crate::entry::{ListingPage, ResolvedEntry};
use crate::fetch::PageFetcher;
use crate::listing::ListingParser;
use crate::resolve::DetailResolver;

/// Default maximum number of listing pages to traverse in one run.
pub const DEFAULT_MAX_PAGES: usize = 50;

/// Drives the listing traversal: fetch a page, extract its rows, resolve
/// every row's detail text in row order, then follow the "Next" link.
///
/// The traversal is bounded by `max_pages` regardless of how many next
/// links the page sequence produces, so a malformed or malicious page
/// chain can never cause an unbounded crawl. A listing fetch failure or
/// a page without a results container ends the traversal gracefully; it
/// never aborts the run.
pub struct Crawler<P: ListingParser> {
    fetcher: PageFetcher,
    parser: P,
    max_pages: usize,
}

impl<P: ListingParser> Crawler<P> {
    /// Creates a crawler bounded by `max_pages` listing fetches.
    pub fn new(fetcher: PageFetcher, parser: P, max_pages: usize) -> Self {
        Self {
            fetcher,
            parser,
            max_pages,
        }
    }

    /// Traverses listing pages starting at `start_url` and returns every
    /// resolved entry in crawl order (page order, then row order).
    ///
    /// Performs at most `max_pages` listing fetches; with a cap of zero
    /// no network activity happens at all.
    pub async fn run(&self, start_url: Url) -> Vec<ResolvedEntry> {
        let resolver = DetailResolver::new(&self.fetcher, &self.parser);
        let mut entries = Vec::new();
        let mut current = Some(start_url);
        let mut page_count = 0;

        while let Some(url) = current {
            if page_count >= self.max_pages {
                debug!(max_pages = self.max_pages, "page cap reached, stopping");
                break;
            }
            info!(page = page_count + 1, url = %url, "processing listing page");

            let page = match self.fetcher.fetch(&url).await {
                Ok(html) => self.parser.parse_listing(&html, &url),
                Err(err) => {
                    // Fatal to this page, not to the run: the traversal
                    // ends as if the page had no next link.
                    warn!(url = %url, error = %err, "listing fetch failed, ending traversal");
                    ListingPage::default()
                }
            };

            for stub in page.stubs {
                entries.push(resolver.resolve(stub).await);
            }

            current = page.next_page;
            page_count += 1;
        }

        entries
    }
}
