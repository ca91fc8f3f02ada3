use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

use crate::article::RawEntry;
use crate::config::SourceConfig;
use crate::parser::parse_feed;

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; ZenNewsBot/1.0)";

/// Errors that make a single source contribute nothing to a run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error, including timeouts
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Feed XML could not be parsed as RSS or Atom
    #[error("Parse error: {0}")]
    Parse(String),
}

/// What a single source yielded during a run
#[derive(Debug)]
pub enum SourceOutcome {
    Fetched(Vec<RawEntry>),
    Failed { reason: String },
}

impl SourceOutcome {
    /// Entries to feed into the pipeline; a failed source contributes none
    pub fn into_entries(self) -> Vec<RawEntry> {
        match self {
            SourceOutcome::Fetched(entries) => entries,
            SourceOutcome::Failed { .. } => Vec::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SourceOutcome::Failed { .. })
    }
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        parse_feed(&bytes[..], Utc::now())
    }

    /// Fetches one configured source. Never fails: errors become `SourceOutcome::Failed`.
    pub async fn fetch_source(&self, source: &SourceConfig) -> SourceOutcome {
        info!("Fetching source: {} ({})", source.name, source.url);

        match self.fetch(&source.url).await {
            Ok(entries) => {
                info!("Fetched {} entries from '{}'", entries.len(), source.name);
                SourceOutcome::Fetched(entries)
            }
            Err(e) => {
                warn!("Failed to fetch source '{}': {}", source.name, e);
                SourceOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
