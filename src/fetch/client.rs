//! HTTP client wrapper for retrieving listing and detail pages.
//!
//! This module centralizes the crawl's networking policy: one client per
//! run, browser-emulating headers, redirect-following, a generous
//! per-request timeout, and connection reuse across every fetch in the
//! run. Connections are torn down when the last clone is dropped, on
//! every exit path.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER,
};
use tracing::debug;
use url::Url;

use super::error::FetchError;

/// Browser User-Agent sent with every request.
///
/// The target serves bot-detection pages to unfamiliar agents, so the
/// client identifies as a mainstream browser rather than as a tool.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Per-request timeout. Detail pages on the target can be slow to render
/// server-side, so this is deliberately generous.
const REQUEST_TIMEOUT_SECS: u64 = 150;

const MAX_REDIRECTS: usize = 10;

/// HTTP client for fetching HTML pages.
///
/// Created once per run and shared between the traversal controller and
/// the detail resolver so all fetches reuse the same connection pool.
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher {
    /// Creates a new fetcher with browser-emulating headers.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(browser_headers())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches `url` and returns the response body on a 2xx status.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::HttpStatus`] for any non-success status and
    /// [`FetchError::Network`] for transport errors, including timeouts.
    /// The caller decides whether the failure is fatal to the traversal
    /// (listing page) or degrades to a fallback (detail page).
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        debug!(url = %url, "fetching page");
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|source| FetchError::network(url.as_str(), source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url.as_str(), status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::network(url.as_str(), source))
    }
}

/// Extended headers mimicking a real browser navigation request.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(
        REFERER,
        HeaderValue::from_static("https://www.tripadvisor.com/"),
    );
    headers.insert(
        ORIGIN,
        HeaderValue::from_static("https://www.tripadvisor.com"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("none"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-user"),
        HeaderValue::from_static("?1"),
    );
    headers
}
