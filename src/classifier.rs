//! Keyword-based classification of entries into a category and a priority tier.
//!
//! Both scorers do case-insensitive substring matching over `title + " " + description`.
//! The tables are stems from Polish-language news, so a keyword like `polityk` matches
//! `polityka`, `polityków` and so on.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Politics,
    Economy,
    Technology,
    Sport,
    Safety,
    Education,
    Culture,
    Health,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Economy => "Economy",
            Category::Technology => "Technology",
            Category::Sport => "Sport",
            Category::Safety => "Safety",
            Category::Education => "Education",
            Category::Culture => "Culture",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered from least to most urgent, so `Ord` ranks `High` first when reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_PRIORITY_THRESHOLD {
            Priority::High
        } else if score >= MEDIUM_PRIORITY_THRESHOLD {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table order is significant: on equal scores the earlier category wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Politics,
        &["polityk", "wybory", "rząd", "parlament", "prezydent", "minister", "sejm", "senat"],
    ),
    (
        Category::Economy,
        &["ekonomia", "biznes", "firma", "bank", "giełda", "inwestycja", "złoty", "euro"],
    ),
    (
        Category::Technology,
        &["technologia", "ai", "komputer", "internet", "aplikacja", "smartfon", "cyber"],
    ),
    (
        Category::Sport,
        &["piłka", "football", "mecz", "liga", "reprezentacja", "sport", "olimpiad", "mundial"],
    ),
    (
        Category::Safety,
        &["policja", "wypadek", "przestępst", "sąd", "zatrzyman", "pożar", "awaria"],
    ),
    (
        Category::Education,
        &["szkoła", "student", "uniwers", "nauka", "badania", "uczniowie", "nauczyciel"],
    ),
    (
        Category::Culture,
        &["film", "muzyka", "teatr", "książka", "wystawa", "koncert", "festiwal"],
    ),
    (
        Category::Health,
        &["lekarz", "szpital", "pandemia", "szczepion", "choroba", "medycyn", "nfz"],
    ),
];

pub const URGENT_KEYWORDS: &[&str] = &[
    "pilne", "breaking", "tragiczny", "wypadek", "zmarł", "zginął", "atak", "wybuch",
];

pub const IMPORTANT_KEYWORDS: &[&str] =
    &["prezydent", "premier", "rząd", "parlament", "wybory", "sąd"];

const URGENT_WEIGHT: u32 = 3;
const IMPORTANT_WEIGHT: u32 = 1;
const HIGH_PRIORITY_THRESHOLD: u32 = 3;
const MEDIUM_PRIORITY_THRESHOLD: u32 = 1;

fn haystack(title: &str, description: &str) -> String {
    format!("{} {}", title, description).to_lowercase()
}

/// Number of keywords present at least once in `text`
fn count_hits(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|k| text.contains(*k)).count() as u32
}

pub fn categorize(title: &str, description: &str) -> Category {
    let text = haystack(title, description);

    let mut best = Category::Other;
    let mut max_score = 0;
    for (category, keywords) in CATEGORY_KEYWORDS {
        let score = count_hits(&text, keywords);
        if score > max_score {
            max_score = score;
            best = *category;
        }
    }

    best
}

pub fn score_priority(title: &str, description: &str) -> u32 {
    let text = haystack(title, description);
    count_hits(&text, URGENT_KEYWORDS) * URGENT_WEIGHT
        + count_hits(&text, IMPORTANT_KEYWORDS) * IMPORTANT_WEIGHT
}

pub fn calculate_priority(title: &str, description: &str) -> Priority {
    Priority::from_score(score_priority(title, description))
}
