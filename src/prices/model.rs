use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// A single price bar from the chart source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBar {
    /// Bar timestamp, Unix seconds.
    pub ts: i64,
    /// Closing price for the bar.
    pub close: f64,
    /// Traded volume; `0` when the source omits it.
    pub volume: u64,
}

impl PriceBar {
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.ts, 0).single()
    }
}

/// Bar width requested from the price source.
///
/// `Hourly` is the finest granularity the pipeline uses; `Daily` is the
/// fallback when the fine-grained series comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Hourly,
    Daily,
}

impl Granularity {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Granularity::Hourly => "1h",
            Granularity::Daily => "1d",
        }
    }

    /// The next coarser granularity to fall back to, if any.
    pub(crate) const fn coarser(self) -> Option<Granularity> {
        match self {
            Granularity::Hourly => Some(Granularity::Daily),
            Granularity::Daily => None,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
