//! Stage orchestration: composes the components into the two runnable
//! stages. The stage boundary is the filesystem: a sentiment CSV written by
//! stage one and read back by stage two.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use tracing::info;

use crate::{
    align::{aggregate_sentiment, align},
    core::{SaClient, SaError},
    dataset,
    news::{
        DEFAULT_MAX_PAGES, DEFAULT_PAGE_DELAY, NewsWalkerBuilder, ScoredArticle, StopReason,
        dedupe_by_url,
    },
    prices::{Granularity, PriceBarsBuilder},
    progress::ProgressReporter,
    sentiment::SentimentScorer,
};

/// Padding added on both sides of the sentiment range when requesting prices,
/// so edge buckets have bars around them.
const PRICE_RANGE_PAD_SECS: i64 = 86_400;

/// Configuration for stage one (`fetch-news`).
#[derive(Debug, Clone)]
pub struct SentimentStageConfig {
    /// How many articles to accumulate before the walk stops on its own.
    pub target_articles: usize,
    /// Article language requested from the source.
    pub language: String,
    /// Fixed delay between page requests.
    pub page_delay: Duration,
    /// Hard page cap for the walk.
    pub max_pages: u32,
    /// Where the sentiment table is written.
    pub output: PathBuf,
}

impl Default for SentimentStageConfig {
    fn default() -> Self {
        Self {
            target_articles: 100_000,
            language: "EN".into(),
            page_delay: DEFAULT_PAGE_DELAY,
            max_pages: DEFAULT_MAX_PAGES,
            output: PathBuf::from("sentiment_data.csv"),
        }
    }
}

/// Account of a completed stage one.
#[derive(Debug)]
pub struct SentimentStageReport {
    /// Articles fetched before deduplication.
    pub fetched: usize,
    /// Pages consumed by the walk.
    pub pages: u32,
    /// Why the walk ended (partial runs report their cause here).
    pub stopped: StopReason,
    /// Unique articles written to the sentiment table.
    pub rows_written: usize,
}

/// Stage one: walk the news source backward, dedupe by URL, score, persist.
///
/// # Errors
///
/// Fatal only when nothing at all was fetched or the table cannot be
/// written; a walk that ends early on a source failure still produces the
/// partial table.
pub async fn run_sentiment_stage(
    client: &SaClient,
    scorer: &dyn SentimentScorer,
    reporter: Arc<dyn ProgressReporter>,
    config: &SentimentStageConfig,
) -> Result<SentimentStageReport, SaError> {
    let walk = NewsWalkerBuilder::new(client)
        .language(config.language.as_str())
        .target_count(config.target_articles)
        .page_delay(config.page_delay)
        .max_pages(config.max_pages)
        .reporter(reporter.clone())
        .walk()
        .await;

    let fetched = walk.articles.len();
    if fetched == 0 {
        return Err(SaError::EmptyData("no articles fetched".into()));
    }

    let unique = dedupe_by_url(walk.articles);
    let total = unique.len();

    let mut scored = Vec::with_capacity(total);
    for (done, article) in unique.into_iter().enumerate() {
        let sentiment = scorer.score(&article.scoring_text());
        scored.push(ScoredArticle { article, sentiment });
        reporter.on_scored(done + 1, total);
    }

    let rows_written = dataset::write_sentiment_table(&config.output, &scored)?;
    info!(
        fetched,
        unique = total,
        pages = walk.pages,
        output = %config.output.display(),
        "sentiment stage complete"
    );

    Ok(SentimentStageReport {
        fetched,
        pages: walk.pages,
        stopped: walk.stopped,
        rows_written,
    })
}

/// Configuration for stage two (`build-dataset`).
#[derive(Debug, Clone)]
pub struct DatasetStageConfig {
    /// Symbol requested from the price source.
    pub symbol: String,
    /// Sentiment table produced by stage one.
    pub sentiment_input: PathBuf,
    /// Where the training table is written.
    pub output: PathBuf,
}

impl Default for DatasetStageConfig {
    fn default() -> Self {
        Self {
            symbol: "ETH-USD".into(),
            sentiment_input: PathBuf::from("sentiment_data.csv"),
            output: PathBuf::from("training_data.csv"),
        }
    }
}

/// Account of a completed stage two.
#[derive(Debug)]
pub struct DatasetStageReport {
    /// Rows loaded from the sentiment table.
    pub sentiment_rows: usize,
    /// Price bars obtained for the padded range.
    pub bars: usize,
    /// Granularity the bars actually came back at.
    pub granularity: Granularity,
    /// Aligned records written to the training table.
    pub rows_written: usize,
}

/// Stage two: load the sentiment table, fetch price bars for its padded time
/// range, align both onto hourly buckets, persist the training table.
///
/// # Errors
///
/// Everything here is fatal: a missing or empty sentiment table, a price
/// series that is empty at both granularities, or a write failure.
pub async fn run_dataset_stage(
    client: &SaClient,
    config: &DatasetStageConfig,
) -> Result<DatasetStageReport, SaError> {
    let rows = dataset::load_sentiment_table(&config.sentiment_input)?;

    // Rows are sorted; the range is first..last padded by a day on each side.
    let min_ts = rows.first().map_or(0, |r| r.published_at);
    let max_ts = rows.last().map_or(0, |r| r.published_at);
    let start = utc_datetime(min_ts - PRICE_RANGE_PAD_SECS)?;
    let end = utc_datetime(max_ts + PRICE_RANGE_PAD_SECS)?;

    let (bars, granularity) = PriceBarsBuilder::new(client, config.symbol.as_str())
        .between(start, end)
        .fetch_with_fallback()
        .await?;

    let buckets = aggregate_sentiment(rows.iter().map(|r| (r.published_at, r.sentiment)));
    let records = align(&bars, &buckets);
    let rows_written = dataset::write_training_table(&config.output, &records)?;

    info!(
        sentiment_rows = rows.len(),
        bars = bars.len(),
        granularity = granularity.as_str(),
        rows_written,
        output = %config.output.display(),
        "dataset stage complete"
    );

    Ok(DatasetStageReport {
        sentiment_rows: rows.len(),
        bars: bars.len(),
        granularity,
        rows_written,
    })
}

fn utc_datetime(ts: i64) -> Result<chrono::DateTime<Utc>, SaError> {
    Utc.timestamp_opt(ts, 0)
        .single()
        .ok_or_else(|| SaError::Timestamp(format!("timestamp {ts} out of range")))
}
