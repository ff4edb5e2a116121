//! Persisted tables: the sentiment CSV written by stage one and the training
//! CSV written by stage two.
//!
//! The sentiment file is the interface between the stages, so its loader
//! validates what it depends on (the two columns it reads) and fails with a
//! typed error instead of producing a partial table. Writes are atomic: the
//! table is staged in the destination directory and renamed into place.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDateTime, TimeZone};

use crate::{align::AlignedRecord, core::SaError, news::ScoredArticle};

/// Fixed format for persisted local timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) const SENTIMENT_HEADERS: [&str; 5] = [
    "Article Title",
    "Article URL",
    "Article Content",
    "Published Date",
    "Sentiment Score",
];

pub(crate) const TRAINING_HEADERS: [&str; 4] = ["datetime", "price", "volume", "Sentiment Score"];

/// One sentiment-table row, reduced to the fields stage two consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRow {
    /// Publish time, Unix seconds.
    pub published_at: i64,
    /// Lexicon polarity recorded by stage one.
    pub sentiment: f64,
}

fn format_local(ts: i64) -> Result<String, SaError> {
    let dt = Local
        .timestamp_opt(ts, 0)
        .single()
        .ok_or_else(|| SaError::Timestamp(format!("timestamp {ts} out of range")))?;
    Ok(dt.format(TIMESTAMP_FORMAT).to_string())
}

fn parse_local(s: &str) -> Result<i64, SaError> {
    let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| SaError::Timestamp(format!("'{s}': {e}")))?;
    // `earliest` picks the first mapping for wall times that occur twice at a
    // DST fall-back; a wall time that never occurs is an error.
    let dt = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| SaError::Timestamp(format!("'{s}' does not exist in the local timezone")))?;
    Ok(dt.timestamp())
}

/// Write the sentiment table: one row per deduplicated article, in arrival
/// order. Returns the number of rows written.
pub fn write_sentiment_table(path: &Path, articles: &[ScoredArticle]) -> Result<usize, SaError> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record(SENTIMENT_HEADERS)?;
    for scored in articles {
        let a = &scored.article;
        w.write_record([
            a.title.as_str(),
            a.url.as_str(),
            a.body.as_str(),
            format_local(a.published_at)?.as_str(),
            scored.sentiment.to_string().as_str(),
        ])?;
    }

    let bytes = w
        .into_inner()
        .map_err(|e| SaError::Data(format!("csv flush: {e}")))?;
    atomic_write(path, &bytes)?;
    Ok(articles.len())
}

/// Load the sentiment table for stage two.
///
/// # Errors
///
/// [`SaError::MissingInput`] when the file or a required column is absent,
/// [`SaError::Timestamp`] for an unparseable `Published Date`, and
/// [`SaError::EmptyData`] when the table holds no rows; all are fatal for
/// the stage. Rows come back sorted by publish time.
pub fn load_sentiment_table(path: &Path) -> Result<Vec<SentimentRow>, SaError> {
    if !path.exists() {
        return Err(SaError::MissingInput(format!(
            "sentiment file {} not found; run the fetch-news stage first",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers.iter().position(|h| h == name).ok_or_else(|| {
            SaError::MissingInput(format!("column '{name}' missing in {}", path.display()))
        })
    };
    let date_idx = column("Published Date")?;
    let score_idx = column("Sentiment Score")?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let date = record
            .get(date_idx)
            .ok_or_else(|| SaError::Data("short sentiment row".into()))?;
        let raw_score = record
            .get(score_idx)
            .ok_or_else(|| SaError::Data("short sentiment row".into()))?;

        rows.push(SentimentRow {
            published_at: parse_local(date)?,
            sentiment: raw_score
                .trim()
                .parse::<f64>()
                .map_err(|e| SaError::Data(format!("invalid sentiment value '{raw_score}': {e}")))?,
        });
    }

    if rows.is_empty() {
        return Err(SaError::EmptyData(format!(
            "no sentiment rows in {}",
            path.display()
        )));
    }

    rows.sort_by_key(|r| r.published_at);
    Ok(rows)
}

/// Write the training table: one row per price bucket, ascending. Returns the
/// number of rows written.
pub fn write_training_table(path: &Path, records: &[AlignedRecord]) -> Result<usize, SaError> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record(TRAINING_HEADERS)?;
    for r in records {
        w.write_record([
            format_local(r.bucket_ts)?.as_str(),
            r.price.to_string().as_str(),
            r.volume.to_string().as_str(),
            r.sentiment.to_string().as_str(),
        ])?;
    }

    let bytes = w
        .into_inner()
        .map_err(|e| SaError::Data(format!("csv flush: {e}")))?;
    atomic_write(path, &bytes)?;
    Ok(records.len())
}

/// Stage the bytes next to the destination and rename into place, so the
/// output file either exists in full or not at all.
fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), SaError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| SaError::Data(format!("not a file path: {}", path.display())))?;

    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp = dir.join(tmp_name);

    fs::write(&tmp, bytes)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}
