//! Forum Crawl Core Library
//!
//! This library crawls a paginated forum search-result listing, resolves
//! each entry's full text from its detail page, filters the results by
//! keyword, and exports the survivors as CSV rows.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`fetch`] - Shared HTTP client for listing and detail page retrieval
//! - [`entry`] - Entry stubs, resolved entries, and per-page results
//! - [`listing`] - Listing-page parsing behind a markup-specific parser trait
//! - [`resolve`] - Per-entry detail resolution with short-text fallback
//! - [`crawl`] - Page-by-page traversal bounded by a page cap
//! - [`filter`] - Case-insensitive keyword filtering
//! - [`export`] - CSV serialization of resolved entries

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod crawl;
pub mod entry;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod listing;
pub mod resolve;

// Re-export commonly used types
pub use crawl::{Crawler, DEFAULT_MAX_PAGES};
pub use entry::{EntryKind, EntryStub, ListingPage, ResolvedEntry};
pub use export::{ExportError, write_csv};
pub use fetch::{BROWSER_USER_AGENT, FetchError, PageFetcher};
pub use filter::filter_by_keywords;
pub use listing::{ForumListingParser, ListingParser};
pub use resolve::DetailResolver;
