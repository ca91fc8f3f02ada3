use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ranker::{MAX_ARTICLES, PER_SOURCE_LIMIT};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory the snapshot documents are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Pause between sources in milliseconds
    #[serde(default = "default_source_delay_ms")]
    pub source_delay_ms: u64,
    /// Maximum entries taken from a single source, never above `PER_SOURCE_LIMIT`
    #[serde(default = "default_per_source_limit")]
    pub per_source_limit: usize,
    /// Maximum articles in the final snapshot, never above `MAX_ARTICLES`
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    pub sources: Vec<SourceConfig>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_source_delay_ms() -> u64 {
    1000
}

fn default_per_source_limit() -> usize {
    PER_SOURCE_LIMIT
}

fn default_max_articles() -> usize {
    MAX_ARTICLES
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
}

impl SourceConfig {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            request_timeout_secs: default_request_timeout_secs(),
            source_delay_ms: default_source_delay_ms(),
            per_source_limit: default_per_source_limit(),
            max_articles: default_max_articles(),
            sources: vec![
                SourceConfig::new("Interia", "https://fakty.interia.pl/feed"),
                SourceConfig::new("TVN24", "https://tvn24.pl/najwazniejsze.xml"),
                SourceConfig::new("Gazeta.pl", "https://rss.gazeta.pl/pub/rss/gazetapl_top.xml"),
                SourceConfig::new("Onet", "https://wiadomosci.onet.pl/rss/wiadomosci"),
            ],
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load from `path` if it exists, otherwise fall back to the built-in source list
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config.clamped())
    }

    /// Caps the per-source and snapshot limits at their fixed maximums
    pub fn clamped(mut self) -> Self {
        self.per_source_limit = self.per_source_limit.min(PER_SOURCE_LIMIT);
        self.max_articles = self.max_articles.min(MAX_ARTICLES);
        self
    }
}
