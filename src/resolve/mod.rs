//! Detail resolution: turning entry stubs into resolved entries.

use tracing::debug;

use crate::entry::{EntryStub, ResolvedEntry};
use crate::fetch::PageFetcher;
use crate::listing::ListingParser;

/// Resolves an entry stub's full text from its detail page.
///
/// Resolution is a total function: a failed detail fetch or an empty
/// extraction degrades to the stub's short text instead of propagating.
/// The resolved `text` is therefore non-empty whenever any source
/// (detail region, whole-document text, or short text) was non-empty.
///
/// Borrows the run's shared [`PageFetcher`] so detail fetches reuse the
/// listing fetches' connection pool.
pub struct DetailResolver<'a, P: ListingParser> {
    fetcher: &'a PageFetcher,
    parser: &'a P,
}

impl<'a, P: ListingParser> DetailResolver<'a, P> {
    pub fn new(fetcher: &'a PageFetcher, parser: &'a P) -> Self {
        Self { fetcher, parser }
    }

    /// Fetches the stub's detail page and produces the resolved entry.
    pub async fn resolve(&self, stub: EntryStub) -> ResolvedEntry {
        let extracted = match self.fetcher.fetch(&stub.detail_url).await {
            Ok(html) => self.parser.extract_detail_text(&html),
            Err(err) => {
                debug!(
                    url = %stub.detail_url,
                    error = %err,
                    "detail fetch failed, falling back to listing text"
                );
                String::new()
            }
        };

        let text = if extracted.trim().is_empty() {
            stub.short_text
        } else {
            extracted
        };

        ResolvedEntry {
            kind: stub.kind,
            text,
            detail_url: stub.detail_url,
        }
    }
}
