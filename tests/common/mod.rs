use std::path::PathBuf;

use serde_json::json;

/// Build a successful news-envelope body from `(published_on, url, title, body)` items.
pub fn news_page(items: &[(i64, &str, &str, &str)]) -> String {
    let data: Vec<_> = items
        .iter()
        .map(|(published_on, url, title, body)| {
            json!({
                "title": title,
                "body": body,
                "published_on": published_on,
                "url": url,
                "source": "wire",
            })
        })
        .collect();

    json!({
        "Type": 100,
        "Message": "News list successfully returned",
        "Data": data,
    })
    .to_string()
}

/// Build a news-envelope body carrying the source's own error status.
pub fn news_error(type_code: i64, message: &str) -> String {
    json!({
        "Type": type_code,
        "Message": message,
        "Data": [],
    })
    .to_string()
}

/// Build a chart body from `(timestamp, close, volume)` bars.
pub fn chart_page(bars: &[(i64, f64, u64)]) -> String {
    let ts: Vec<_> = bars.iter().map(|b| b.0).collect();
    let close: Vec<_> = bars.iter().map(|b| b.1).collect();
    let volume: Vec<_> = bars.iter().map(|b| b.2).collect();

    json!({
        "chart": {
            "result": [{
                "timestamp": ts,
                "indicators": { "quote": [{ "close": close, "volume": volume }] }
            }],
            "error": null,
        }
    })
    .to_string()
}

/// Build a chart body whose series is present but empty.
pub fn chart_empty() -> String {
    chart_page(&[])
}

/// A per-test scratch path under the system temp dir.
pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sentalign-it-{}-{name}", std::process::id()))
}
