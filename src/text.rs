use once_cell::sync::Lazy;
use regex::Regex;

/// Summary returned when an entry carries no usable description
pub const SUMMARY_PLACEHOLDER: &str = "No article description available.";

/// Fragments shorter than this (in characters) are treated as noise
const MIN_SENTENCE_CHARS: usize = 10;

static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[^;]+;").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static RE_SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Strips markup tags and HTML entities, then collapses whitespace.
///
/// Each entity (`&amp;`, `&#8211;`, ...) is replaced by a single space rather than
/// decoded, so the result never contains entity text.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let without_tags = RE_TAG.replace_all(text, "");
    let without_entities = RE_ENTITY.replace_all(&without_tags, " ");
    RE_WHITESPACE
        .replace_all(&without_entities, " ")
        .trim()
        .to_string()
}

/// Builds a short plain-text summary from the first `max_sentences` sentences.
pub fn generate_summary(description: Option<&str>, max_sentences: usize) -> String {
    let description = match description {
        Some(d) if !d.trim().is_empty() => d,
        _ => return SUMMARY_PLACEHOLDER.to_string(),
    };

    let cleaned = clean_text(description);
    let sentences: Vec<&str> = RE_SENTENCE_END
        .split(&cleaned)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .take(max_sentences)
        .collect();

    if sentences.is_empty() {
        return SUMMARY_PLACEHOLDER.to_string();
    }

    let mut summary = sentences.join(". ");
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}
