//! Page fetching over HTTP.
//!
//! One [`PageFetcher`] is created per run and shared by the traversal
//! controller and the detail resolver; see [`client`] for the shared
//! networking policy.

mod client;
mod error;

pub use client::{BROWSER_USER_AGENT, PageFetcher};
pub use error::FetchError;
