use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sentalign::{
    LexiconScorer, SaClient, StopReason, TracingReporter,
    pipeline::{self, DatasetStageConfig, SentimentStageConfig},
};

#[derive(Parser)]
#[command(name = "sentalign")]
#[command(
    about = "Build news-sentiment training datasets",
    version,
    arg_required_else_help = true
)]
#[command(
    after_help = "Examples:\n  sentalign fetch-news --target 5000\n  sentalign build-dataset --symbol ETH-USD\n"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch news, score sentiment, and write the sentiment table.
    FetchNews {
        /// Stop after accumulating this many articles.
        #[arg(long, default_value_t = 100_000)]
        target: usize,
        /// Article language requested from the source.
        #[arg(long, default_value = "EN")]
        lang: String,
        /// Delay between page requests, in milliseconds.
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
        /// Where to write the sentiment table.
        #[arg(long, default_value = "sentiment_data.csv")]
        out: PathBuf,
    },
    /// Fetch prices for the sentiment table's range and write the training table.
    BuildDataset {
        /// Symbol requested from the price source.
        #[arg(long, default_value = "ETH-USD")]
        symbol: String,
        /// Sentiment table produced by fetch-news.
        #[arg(long, default_value = "sentiment_data.csv")]
        sentiment: PathBuf,
        /// Where to write the training table.
        #[arg(long, default_value = "training_data.csv")]
        out: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let client = SaClient::builder()
        .build()
        .context("failed to build HTTP client")?;

    match cli.command {
        Command::FetchNews {
            target,
            lang,
            delay_ms,
            out,
        } => {
            let config = SentimentStageConfig {
                target_articles: target,
                language: lang,
                page_delay: Duration::from_millis(delay_ms),
                output: out,
                ..SentimentStageConfig::default()
            };
            let scorer = LexiconScorer::new();

            let report =
                pipeline::run_sentiment_stage(&client, &scorer, Arc::new(TracingReporter), &config)
                    .await
                    .context("fetch-news stage failed")?;

            if let StopReason::SourceError(cause) = &report.stopped {
                tracing::warn!(%cause, "walk ended early; the sentiment table is partial");
            }
            println!(
                "wrote {} unique articles to {} ({} fetched over {} pages)",
                report.rows_written,
                config.output.display(),
                report.fetched,
                report.pages
            );
        }
        Command::BuildDataset {
            symbol,
            sentiment,
            out,
        } => {
            let config = DatasetStageConfig {
                symbol,
                sentiment_input: sentiment,
                output: out,
            };

            let report = pipeline::run_dataset_stage(&client, &config)
                .await
                .context("build-dataset stage failed")?;

            println!(
                "wrote {} rows to {} ({} {} bars, {} sentiment rows)",
                report.rows_written,
                config.output.display(),
                report.bars,
                report.granularity,
                report.sentiment_rows
            );
        }
    }

    Ok(())
}
