mod api;
mod cursor;
mod dedupe;
mod model;
mod wire;

pub use cursor::{StopReason, WalkCursor};
pub use dedupe::dedupe_by_url;
pub use model::{NewsArticle, ScoredArticle};

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::{
    core::SaClient,
    progress::{NullReporter, ProgressReporter},
};
use cursor::Advance;

/// Default inter-request delay, respecting the source's informal rate limit.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Hard cap on pages per walk; backstop behind the cursor-monotonicity check.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// The raw article stream plus an account of how the walk ended.
#[derive(Debug)]
pub struct WalkReport {
    /// Articles in arrival order (newest first), duplicates included.
    pub articles: Vec<NewsArticle>,
    /// Number of non-empty pages consumed.
    pub pages: u32,
    /// Why the walk stopped.
    pub stopped: StopReason,
}

/// A builder for walking the news source backward in time.
///
/// Issues one throttled request at a time, advancing the cursor to the oldest
/// publish timestamp of each page. Any transport or decode failure ends the
/// walk and keeps what was accumulated so far; there is no retry.
pub struct NewsWalkerBuilder {
    client: SaClient,
    language: String,
    target_count: usize,
    page_delay: Duration,
    max_pages: u32,
    reporter: Arc<dyn ProgressReporter>,
}

impl NewsWalkerBuilder {
    /// Creates a new walker with the default language (`EN`), delay, and page cap.
    pub fn new(client: &SaClient) -> Self {
        Self {
            client: client.clone(),
            language: "EN".to_string(),
            target_count: 100,
            page_delay: DEFAULT_PAGE_DELAY,
            max_pages: DEFAULT_MAX_PAGES,
            reporter: Arc::new(NullReporter),
        }
    }

    /// Sets the article language requested from the source.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets how many articles to accumulate before stopping.
    #[must_use]
    pub const fn target_count(mut self, count: usize) -> Self {
        self.target_count = count;
        self
    }

    /// Sets the fixed delay between page requests.
    #[must_use]
    pub const fn page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Sets the hard page cap.
    #[must_use]
    pub const fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Sets the progress reporter notified after each page.
    #[must_use]
    pub fn reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Executes the walk.
    ///
    /// Never fails: a failing source yields whatever was accumulated before
    /// the failure, with the cause recorded in [`WalkReport::stopped`].
    pub async fn walk(self) -> WalkReport {
        let mut cur = WalkCursor::default();
        let mut articles: Vec<NewsArticle> = Vec::new();

        if self.target_count == 0 {
            return WalkReport {
                articles,
                pages: 0,
                stopped: StopReason::TargetReached,
            };
        }

        let stopped = loop {
            let page = match api::fetch_page(&self.client, &self.language, cur.value()).await {
                Ok(page) => page,
                Err(err) => {
                    warn!(error = %err, collected = articles.len(), "news walk aborted, keeping partial results");
                    break StopReason::SourceError(err.to_string());
                }
            };

            let verdict = cur.advance(
                &page,
                articles.len() + page.len(),
                self.target_count,
                self.max_pages,
            );
            articles.extend(page);

            if let Advance::Stop(reason) = verdict {
                break reason;
            }

            self.reporter
                .on_page(articles.len(), cur.value().unwrap_or_default());
            tokio::time::sleep(self.page_delay).await;
        };

        WalkReport {
            articles,
            pages: cur.pages(),
            stopped,
        }
    }
}
