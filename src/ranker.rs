use std::cmp::Reverse;
use std::collections::HashSet;

use crate::article::Article;

/// Upper bound on the persisted article set
pub const MAX_ARTICLES: usize = 20;

/// Upper bound on entries a single source contributes to the candidate pool
pub const PER_SOURCE_LIMIT: usize = 8;

/// Characters of the normalized title compared when detecting duplicates
const DEDUP_KEY_CHARS: usize = 50;

/// Normalized title prefix used to detect the same story across sources.
///
/// Only ASCII letters, digits and whitespace survive; accented letters are dropped
/// along with punctuation.
pub fn dedup_key(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(DEDUP_KEY_CHARS)
        .collect()
}

/// Keeps the first article seen for each dedup key, in input order.
pub fn deduplicate(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(dedup_key(&article.title)))
        .collect()
}

/// Orders by priority (high first), then most recently collected, and keeps `limit`.
///
/// The sort is stable, so articles that tie on both keys keep their input order.
pub fn rank(mut articles: Vec<Article>, limit: usize) -> Vec<Article> {
    articles.sort_by_key(|a| (Reverse(a.priority), Reverse(a.collected_at)));
    articles.truncate(limit);
    articles
}
