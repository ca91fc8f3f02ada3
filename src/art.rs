use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MEDIUM: &str = "Digital graphic";
const DIMENSIONS: &str = "400x300px";
const TAGS: &[&str] = &["abstraction", "minimalism", "generative-art"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyArt {
    pub title: String,
    pub artist: String,
    pub description: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub medium: String,
    pub dimensions: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

struct Artwork {
    title: &'static str,
    artist: &'static str,
    description: &'static str,
    image_url: &'static str,
}

const ROTATION: &[Artwork] = &[
    Artwork {
        title: "Abstract composition #247",
        artist: "AI Generated",
        description: "A minimalist composition in shades of grey exploring the relationship between space and form.",
        image_url: "data:image/svg+xml,%3Csvg width='400' height='300' xmlns='http://www.w3.org/2000/svg'%3E%3Crect width='400' height='300' fill='%23f8f9fa'/%3E%3Crect x='50' y='50' width='120' height='80' fill='%23343a40'/%3E%3Ccircle cx='300' cy='150' r='60' fill='%23868e96'/%3E%3Cpath d='M150 200 L250 180 L200 250 Z' fill='%23495057'/%3E%3C/svg%3E",
    },
    Artwork {
        title: "Geometric harmony #12",
        artist: "Algorithm Design",
        description: "A simple play of colour and shape inspired by the Bauhaus and Russian constructivism.",
        image_url: "data:image/svg+xml,%3Csvg width='400' height='300' xmlns='http://www.w3.org/2000/svg'%3E%3Crect width='400' height='300' fill='%23fff'/%3E%3Ccircle cx='100' cy='100' r='40' fill='%23ff6b6b'/%3E%3Crect x='200' y='50' width='80' height='80' fill='%234ecdc4'/%3E%3Cpath d='M300 200 L350 250 L250 250 Z' fill='%23ffe66d'/%3E%3C/svg%3E",
    },
    Artwork {
        title: "Digital meditation",
        artist: "Neural Network",
        description: "Calm, flowing forms that emerged from a deep learning process.",
        image_url: "data:image/svg+xml,%3Csvg width='400' height='300' xmlns='http://www.w3.org/2000/svg'%3E%3Crect width='400' height='300' fill='%23e8f4f8'/%3E%3Cpath d='M50 150 Q200 50 350 150 Q200 250 50 150' fill='%236c5ce7' opacity='0.7'/%3E%3Cpath d='M100 100 Q250 200 350 100' stroke='%23fd79a8' stroke-width='3' fill='none'/%3E%3C/svg%3E",
    },
];

impl DailyArt {
    /// Picks the artwork for `now` by day of year (1 on January 1st) modulo the rotation.
    pub fn for_time(now: DateTime<Utc>) -> Self {
        let date = now.date_naive();
        let artwork = &ROTATION[date.ordinal() as usize % ROTATION.len()];

        Self {
            title: artwork.title.to_string(),
            artist: artwork.artist.to_string(),
            description: artwork.description.to_string(),
            image_url: artwork.image_url.to_string(),
            date,
            medium: MEDIUM.to_string(),
            dimensions: DIMENSIONS.to_string(),
            tags: TAGS.iter().map(|t| t.to_string()).collect(),
            updated_at: now,
        }
    }

    /// Stand-in shown by the display layer when the snapshot cannot be loaded
    pub fn placeholder() -> Self {
        let now = Utc::now();
        Self {
            title: "Artwork of the day".to_string(),
            artist: "Unknown".to_string(),
            description: "Today's artwork is not available yet.".to_string(),
            image_url: String::new(),
            date: now.date_naive(),
            medium: MEDIUM.to_string(),
            dimensions: DIMENSIONS.to_string(),
            tags: Vec::new(),
            updated_at: now,
        }
    }
}
