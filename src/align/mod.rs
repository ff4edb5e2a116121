//! Temporal alignment of the article stream and the price series.
//!
//! Both inputs are floored onto fixed one-hour buckets, sentiment is
//! aggregated per bucket, and the price series is left-joined against the
//! aggregates. Everything here is a pure transformation over in-memory
//! data: identical inputs produce identical output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::prices::PriceBar;

/// Fixed bucket width: one hour.
pub const BUCKET_WIDTH_SECS: i64 = 3600;

/// Floor a timestamp to the start of its bucket.
///
/// Boundaries are inclusive of their start and exclusive of their end: a
/// timestamp exactly on a boundary belongs to the bucket it starts.
pub fn bucket_start(ts: i64) -> i64 {
    ts - ts.rem_euclid(BUCKET_WIDTH_SECS)
}

/// One row of the final training table: a price bucket with its aggregated
/// sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedRecord {
    /// Bucket start, Unix seconds.
    pub bucket_ts: i64,
    /// Close of the last bar observed for the bucket.
    pub price: f64,
    /// Volume of that same bar.
    pub volume: u64,
    /// Mean article sentiment for the bucket; `0.0` when no article fell in it.
    pub sentiment: f64,
}

/// Arithmetic-mean sentiment per non-empty bucket, from
/// `(publish timestamp, score)` points.
///
/// Buckets with zero articles are absent from the map; [`align`] materializes
/// them with the explicit neutral default instead of omitting the row.
pub fn aggregate_sentiment<I>(points: I) -> BTreeMap<i64, f64>
where
    I: IntoIterator<Item = (i64, f64)>,
{
    let mut sums: BTreeMap<i64, (f64, u32)> = BTreeMap::new();
    for (ts, score) in points {
        let slot = sums.entry(bucket_start(ts)).or_insert((0.0, 0));
        slot.0 += score;
        slot.1 += 1;
    }

    sums.into_iter()
        .map(|(ts, (sum, count))| (ts, sum / f64::from(count)))
        .collect()
}

/// Left-join the price series against the sentiment aggregates on bucket
/// start.
///
/// Every price bucket produces exactly one record; when several bars floor
/// to the same bucket, the last bar observed wins. Price buckets with no
/// sentiment aggregate receive `0.0` (never NaN); sentiment buckets with no
/// price bucket are dropped, so output cardinality is driven by price alone.
/// Records are ordered by ascending bucket start.
pub fn align(bars: &[PriceBar], sentiment: &BTreeMap<i64, f64>) -> Vec<AlignedRecord> {
    let mut by_bucket: BTreeMap<i64, &PriceBar> = BTreeMap::new();
    for bar in bars {
        by_bucket.insert(bucket_start(bar.ts), bar);
    }

    by_bucket
        .into_iter()
        .map(|(bucket_ts, bar)| AlignedRecord {
            bucket_ts,
            price: bar.close,
            volume: bar.volume,
            sentiment: sentiment.get(&bucket_ts).copied().unwrap_or(0.0),
        })
        .collect()
}
