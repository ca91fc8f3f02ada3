use chrono::{DateTime, Utc};
use feed_rs::parser;

use crate::article::RawEntry;
use crate::fetcher::FetchError;

/// Parses an RSS or Atom payload into entries, preserving document order.
///
/// Entries without a published or updated date are stamped with `fetched_at`.
/// A malformed document fails as a whole.
pub fn parse_feed(bytes: &[u8], fetched_at: DateTime<Utc>) -> Result<Vec<RawEntry>, FetchError> {
    let feed = parser::parse(bytes).map_err(|e| FetchError::Parse(e.to_string()))?;

    let source_title = feed.title.map(|t| t.content);

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry.title.map(|t| t.content).unwrap_or_default();
            // RSS <description> and Atom <summary> both land in `summary`
            let description = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body));
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();
            let published = entry.published.or(entry.updated).unwrap_or(fetched_at);

            RawEntry {
                title,
                description,
                link,
                published,
                source_title: source_title.clone(),
            }
        })
        .collect();

    Ok(entries)
}
