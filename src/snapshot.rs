use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::art::DailyArt;
use crate::article::Article;
use crate::classifier::Category;

pub const ARTICLES_FILE: &str = "articles.json";
pub const DAILY_ART_FILE: &str = "daily-art.json";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Writes the snapshot documents into a fixed directory, replacing previous contents.
pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn articles_path(&self) -> PathBuf {
        self.dir.join(ARTICLES_FILE)
    }

    pub fn daily_art_path(&self) -> PathBuf {
        self.dir.join(DAILY_ART_FILE)
    }

    pub async fn write_articles(&self, articles: &[Article]) -> Result<(), SnapshotError> {
        let path = self.articles_path();
        write_json(&path, &articles).await?;
        info!("Saved {} articles to {}", articles.len(), path.display());
        Ok(())
    }

    pub async fn write_daily_art(&self, art: &DailyArt) -> Result<(), SnapshotError> {
        let path = self.daily_art_path();
        write_json(&path, art).await?;
        info!("Updated artwork of the day: {}", art.title);
        Ok(())
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| SnapshotError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn load_articles(dir: &Path) -> Result<Vec<Article>, SnapshotError> {
    read_json(&dir.join(ARTICLES_FILE)).await
}

pub async fn load_daily_art(dir: &Path) -> Result<DailyArt, SnapshotError> {
    read_json(&dir.join(DAILY_ART_FILE)).await
}

/// Loads the article snapshot, substituting a single placeholder on any failure
pub async fn load_articles_or_placeholder(dir: &Path) -> Vec<Article> {
    match load_articles(dir).await {
        Ok(articles) => articles,
        Err(e) => {
            warn!("Falling back to placeholder article: {}", e);
            vec![Article::placeholder()]
        }
    }
}

pub async fn load_daily_art_or_placeholder(dir: &Path) -> DailyArt {
    match load_daily_art(dir).await {
        Ok(art) => art,
        Err(e) => {
            warn!("Falling back to placeholder artwork: {}", e);
            DailyArt::placeholder()
        }
    }
}

/// Categories present in `articles`, in first-seen order
pub fn distinct_categories(articles: &[Article]) -> Vec<Category> {
    let mut categories = Vec::new();
    for article in articles {
        if !categories.contains(&article.category) {
            categories.push(article.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Priority;
    use chrono::{NaiveDate, Utc};

    fn article(id: &str, category: Category) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Title {}", id),
            summary: "Summary.".to_string(),
            content: "Content".to_string(),
            category,
            source: "Test".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 12, 9).unwrap(),
            priority: Priority::Medium,
            original_link: "https://example.com".to_string(),
            collected_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested").join("data");
        let writer = SnapshotWriter::new(&dir);

        writer
            .write_articles(&[article("1", Category::Sport)])
            .await
            .unwrap();

        assert!(dir.join(ARTICLES_FILE).exists());
        let loaded = load_articles(&dir).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "1");
    }

    #[tokio::test]
    async fn test_write_replaces_previous_contents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = SnapshotWriter::new(temp_dir.path());

        writer
            .write_articles(&[article("1", Category::Sport), article("2", Category::Health)])
            .await
            .unwrap();
        writer
            .write_articles(&[article("3", Category::Other)])
            .await
            .unwrap();

        let loaded = load_articles(temp_dir.path()).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "3");
    }

    #[tokio::test]
    async fn test_articles_document_is_json_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = SnapshotWriter::new(temp_dir.path());
        writer.write_articles(&[]).await.unwrap();

        let raw = std::fs::read_to_string(writer.articles_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_daily_art_written_and_loaded() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = SnapshotWriter::new(temp_dir.path());
        let art = DailyArt::for_time(Utc::now());

        writer.write_daily_art(&art).await.unwrap();

        let loaded = load_daily_art(temp_dir.path()).await.unwrap();
        assert_eq!(loaded, art);
    }

    #[tokio::test]
    async fn test_unwritable_location_is_error() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        // A regular file where a directory is expected
        let writer = SnapshotWriter::new(temp_file.path().join("data"));

        let result = writer.write_articles(&[]).await;
        assert!(matches!(result, Err(SnapshotError::Io { .. })));
    }

    #[tokio::test]
    async fn test_missing_snapshot_falls_back_to_placeholders() {
        let temp_dir = tempfile::tempdir().unwrap();

        let articles = load_articles_or_placeholder(temp_dir.path()).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "placeholder");

        let art = load_daily_art_or_placeholder(temp_dir.path()).await;
        assert_eq!(art.title, DailyArt::placeholder().title);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_falls_back_to_placeholder() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(ARTICLES_FILE), "{ not json").unwrap();

        let articles = load_articles_or_placeholder(temp_dir.path()).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "placeholder");
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let articles = vec![
            article("1", Category::Sport),
            article("2", Category::Politics),
            article("3", Category::Sport),
            article("4", Category::Other),
        ];

        assert_eq!(
            distinct_categories(&articles),
            vec![Category::Sport, Category::Politics, Category::Other]
        );
        assert!(distinct_categories(&[]).is_empty());
    }
}
