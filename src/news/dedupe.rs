use std::collections::HashSet;

use crate::news::model::NewsArticle;

/// Collapse a raw article stream to one article per URL.
///
/// First-seen-wins: when the same URL appears on multiple pages (boundary
/// articles repeat because the cursor advances by timestamp, not by an
/// exclusive marker), the earliest-arriving copy is kept and later duplicates
/// are dropped silently. Input order is otherwise preserved.
pub fn dedupe_by_url(articles: Vec<NewsArticle>) -> Vec<NewsArticle> {
    let mut seen = HashSet::with_capacity(articles.len());
    articles
        .into_iter()
        .filter(|a| seen.insert(a.url.clone()))
        .collect()
}
