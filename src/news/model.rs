use serde::Serialize;

/// A single article as fetched from the news source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// The headline of the article.
    pub title: String,
    /// A direct link to the article; the unique key across the ingested set.
    pub url: String,
    /// The article body text.
    pub body: String,
    /// The Unix timestamp (in seconds) of when the article was published.
    pub published_at: i64,
    /// The publisher of the article.
    pub source: String,
}

impl NewsArticle {
    /// The text submitted to the sentiment scorer: headline and body joined
    /// by a sentence break.
    pub fn scoring_text(&self) -> String {
        format!("{}. {}", self.title, self.body)
    }
}

/// A [`NewsArticle`] with its lexicon polarity attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredArticle {
    pub article: NewsArticle,
    /// Polarity of `scoring_text()`; deterministic for a given title + body.
    pub sentiment: f64,
}
