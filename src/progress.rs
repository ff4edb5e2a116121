use tracing::info;

/// Injected progress reporting for the long-running stages.
///
/// The core algorithms never print; callers choose an implementation (or
/// [`NullReporter`] to silence a run entirely).
pub trait ProgressReporter: Send + Sync {
    /// Called after each fetched page with the running article count and the
    /// oldest publish timestamp reached so far.
    fn on_page(&self, collected: usize, oldest_ts: i64);

    /// Called while scoring with the number of articles scored so far out of
    /// the deduplicated total.
    fn on_scored(&self, scored: usize, total: usize);
}

/// Reports progress through `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn on_page(&self, collected: usize, oldest_ts: i64) {
        info!(collected, oldest_ts, "fetched news page");
    }

    fn on_scored(&self, scored: usize, total: usize) {
        // One line per thousand keeps large runs readable.
        if scored == total || scored % 1000 == 0 {
            info!(scored, total, "scored articles");
        }
    }
}

/// Discards every progress event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn on_page(&self, _collected: usize, _oldest_ts: i64) {}
    fn on_scored(&self, _scored: usize, _total: usize) {}
}
