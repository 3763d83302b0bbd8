//! Keyword filtering of resolved entries.

use crate::entry::ResolvedEntry;

/// Retains entries whose text contains at least one keyword,
/// case-insensitively, preserving the original order.
///
/// The selection is a stable subsequence: entries are never mutated or
/// reordered. Filtering is idempotent, and an empty keyword set retains
/// nothing.
#[must_use]
pub fn filter_by_keywords(entries: Vec<ResolvedEntry>, keywords: &[String]) -> Vec<ResolvedEntry> {
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    entries
        .into_iter()
        .filter(|entry| {
            let text = entry.text.to_lowercase();
            lowered.iter().any(|keyword| text.contains(keyword.as_str()))
        })
        .collect()
}
