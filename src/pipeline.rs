use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::art::DailyArt;
use crate::article::Article;
use crate::config::Config;
use crate::fetcher::{Fetcher, SourceOutcome};
use crate::ranker;
use crate::snapshot::SnapshotWriter;

/// How one source fared during a run
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    pub name: String,
    /// Entries the feed contained before the per-source cap
    pub fetched: usize,
    /// Articles added to the candidate pool
    pub accepted: usize,
    pub error: Option<String>,
}

/// Candidate pool plus per-source bookkeeping, before dedup and ranking
#[derive(Debug)]
pub struct Collection {
    pub articles: Vec<Article>,
    pub sources: Vec<SourceReport>,
}

impl Collection {
    pub fn total_fetched(&self) -> usize {
        self.sources.iter().map(|s| s.fetched).sum()
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub total: usize,
    pub total_fetched: usize,
    pub candidates: usize,
    pub categories: BTreeMap<String, usize>,
    pub sources: BTreeMap<String, usize>,
    pub priorities: BTreeMap<String, usize>,
    pub source_reports: Vec<SourceReport>,
    pub daily_art_title: String,
    pub updated_at: DateTime<Utc>,
    pub duration: Duration,
}

impl RunReport {
    fn build(
        articles: &[Article],
        collection: &Collection,
        daily_art: &DailyArt,
        duration: Duration,
    ) -> Self {
        let mut categories = BTreeMap::new();
        let mut sources = BTreeMap::new();
        let mut priorities = BTreeMap::new();
        for article in articles {
            *categories.entry(article.category.to_string()).or_insert(0) += 1;
            *sources.entry(article.source.clone()).or_insert(0) += 1;
            *priorities.entry(article.priority.to_string()).or_insert(0) += 1;
        }

        Self {
            total: articles.len(),
            total_fetched: collection.total_fetched(),
            candidates: collection.articles.len(),
            categories,
            sources,
            priorities,
            source_reports: collection.sources.clone(),
            daily_art_title: daily_art.title.clone(),
            updated_at: Utc::now(),
            duration,
        }
    }

    pub fn failed_sources(&self) -> usize {
        self.source_reports.iter().filter(|s| s.error.is_some()).count()
    }

    /// Emits the report through `tracing`, largest groups first
    pub fn log(&self) {
        info!("Update report: {} articles at {}", self.total, self.updated_at.to_rfc3339());

        for (category, count) in sorted_by_count(&self.categories) {
            info!("  category {}: {}", category, count);
        }
        for (source, count) in sorted_by_count(&self.sources) {
            info!("  source {}: {}", source, count);
        }
        for (priority, count) in &self.priorities {
            info!("  priority {}: {}", priority, count);
        }
        for source in &self.source_reports {
            if let Some(error) = &source.error {
                info!("  source {} failed: {}", source.name, error);
            }
        }

        info!(
            "Run finished in {:.2}s ({} fetched, {} candidates, {} failed sources)",
            self.duration.as_secs_f64(),
            self.total_fetched,
            self.candidates,
            self.failed_sources()
        );
    }
}

fn sorted_by_count(counts: &BTreeMap<String, usize>) -> Vec<(&String, &usize)> {
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
}

/// Drives one collection run over an immutable configuration.
pub struct Pipeline {
    config: Config,
    fetcher: Fetcher,
    writer: SnapshotWriter,
}

impl Pipeline {
    pub fn new(config: Config, fetcher: Fetcher, writer: SnapshotWriter) -> Self {
        Self {
            config: config.clamped(),
            fetcher,
            writer,
        }
    }

    /// Builds a pipeline whose fetcher and writer follow `config`
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let fetcher = Fetcher::new(Duration::from_secs(config.request_timeout_secs))?;
        let writer = SnapshotWriter::new(config.output_dir.clone());
        Ok(Self::new(config, fetcher, writer))
    }

    /// Fetches every source in order and returns the capped, classified candidate pool.
    pub async fn collect(&self) -> Collection {
        let mut articles = Vec::new();
        let mut sources = Vec::with_capacity(self.config.sources.len());
        let delay = Duration::from_millis(self.config.source_delay_ms);

        for (index, source) in self.config.sources.iter().enumerate() {
            if index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let outcome = self.fetcher.fetch_source(source).await;
            let error = match &outcome {
                SourceOutcome::Failed { reason } => Some(reason.clone()),
                SourceOutcome::Fetched(_) => None,
            };
            let entries = outcome.into_entries();
            let collected_at = Utc::now();

            let before = articles.len();
            articles.extend(
                entries
                    .iter()
                    .take(self.config.per_source_limit)
                    .filter_map(|entry| Article::from_entry(entry, &source.name, collected_at)),
            );

            sources.push(SourceReport {
                name: source.name.clone(),
                fetched: entries.len(),
                accepted: articles.len() - before,
                error,
            });
        }

        info!(
            "Collected {} entries from {} sources",
            sources.iter().map(|s| s.fetched).sum::<usize>(),
            sources.len()
        );

        Collection { articles, sources }
    }

    /// Runs collection, ranking and persistence. Only snapshot failures are errors.
    pub async fn run(&self) -> anyhow::Result<RunReport> {
        let started = Instant::now();
        info!("Starting news collection");

        let collection = self.collect().await;
        let unique = ranker::deduplicate(collection.articles.clone());
        let articles = ranker::rank(unique, self.config.max_articles);
        info!("After filtering: {} unique articles", articles.len());

        self.writer.write_articles(&articles).await?;

        let daily_art = DailyArt::for_time(Utc::now());
        self.writer.write_daily_art(&daily_art).await?;

        let report = RunReport::build(&articles, &collection, &daily_art, started.elapsed());
        report.log();
        Ok(report)
    }
}
