//! Explicit pagination state for the backward walk.
//!
//! A plain fetch loop would carry the cursor implicitly; keeping it in a
//! small struct with a pure transition function lets individual page
//! transitions be tested without a live source.

use crate::news::model::NewsArticle;

/// Why a walk stopped. Every walk stops for exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The accumulated article count reached the requested target.
    TargetReached,
    /// The source returned a page with zero articles.
    EmptyPage,
    /// The cursor failed to strictly decrease between pages.
    CursorStalled,
    /// The hard page cap was hit.
    PageLimit,
    /// A transport, status, or decode failure ended the walk; the articles
    /// accumulated before it are kept.
    SourceError(String),
}

pub(crate) enum Advance {
    Continue,
    Stop(StopReason),
}

/// Pagination marker: the oldest publish timestamp seen so far, plus the
/// number of pages consumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkCursor {
    oldest_seen: Option<i64>,
    pages: u32,
}

impl WalkCursor {
    /// The timestamp to send as the next request's cursor parameter, or
    /// `None` before the first page.
    pub fn value(&self) -> Option<i64> {
        self.oldest_seen
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Fold one fetched page into the cursor and decide whether to continue.
    ///
    /// `total_collected` is the accumulated count *including* this page.
    /// The cursor only ever moves backward in time; a page that fails to
    /// strictly decrease it stops the walk (a source echoing the same page
    /// would otherwise loop forever).
    pub(crate) fn advance(
        &mut self,
        page: &[NewsArticle],
        total_collected: usize,
        target: usize,
        max_pages: u32,
    ) -> Advance {
        if page.is_empty() {
            return Advance::Stop(StopReason::EmptyPage);
        }
        self.pages += 1;

        let oldest = page
            .iter()
            .map(|a| a.published_at)
            .min()
            .unwrap_or(i64::MIN);

        if let Some(prev) = self.oldest_seen
            && oldest >= prev
        {
            return Advance::Stop(StopReason::CursorStalled);
        }
        self.oldest_seen = Some(oldest);

        if total_collected >= target {
            return Advance::Stop(StopReason::TargetReached);
        }
        if self.pages >= max_pages {
            return Advance::Stop(StopReason::PageLimit);
        }
        Advance::Continue
    }
}
