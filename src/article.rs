use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::{self, Category, Priority};
use crate::text;

/// Sentences kept in an article summary
pub const SUMMARY_SENTENCES: usize = 2;

const UNKNOWN_SOURCE: &str = "Unknown source";

/// One syndication entry as read from a feed, before any normalization
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub published: DateTime<Utc>,
    /// Title declared by the feed itself
    pub source_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub category: Category,
    pub source: String,
    pub date: NaiveDate,
    pub priority: Priority,
    pub original_link: String,
    pub collected_at: DateTime<Utc>,
}

impl Article {
    /// Normalizes and classifies a raw entry.
    ///
    /// Returns `None` when the entry has no title left after cleaning.
    pub fn from_entry(entry: &RawEntry, source: &str, collected_at: DateTime<Utc>) -> Option<Self> {
        let title = text::clean_text(&entry.title);
        if title.is_empty() {
            return None;
        }

        let description = entry.description.as_deref().unwrap_or("");
        let content = text::clean_text(description);
        let category = classifier::categorize(&title, &content);
        let priority = classifier::calculate_priority(&title, &content);

        let source = if !source.trim().is_empty() {
            source.to_string()
        } else {
            entry
                .source_title
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
        };

        Some(Self {
            id: Uuid::new_v4().to_string(),
            summary: text::generate_summary(entry.description.as_deref(), SUMMARY_SENTENCES),
            content,
            category,
            priority,
            title,
            source,
            date: entry.published.date_naive(),
            original_link: entry.link.clone(),
            collected_at,
        })
    }

    /// Stand-in shown by the display layer when the snapshot cannot be loaded
    pub fn placeholder() -> Self {
        let now = Utc::now();
        Self {
            id: "placeholder".to_string(),
            title: "News is on its way".to_string(),
            summary: "The latest articles could not be loaded. Please check back shortly."
                .to_string(),
            content: "The article snapshot is unavailable right now. It is refreshed on every collection run."
                .to_string(),
            category: Category::Other,
            source: "Zen News".to_string(),
            date: now.date_naive(),
            priority: Priority::Low,
            original_link: "#".to_string(),
            collected_at: now,
        }
    }
}
