//! Public client surface + builder.
//!
//! One `SaClient` is shared by both pipeline stages; it carries the HTTP
//! client and the base URLs of the two external sources so tests can point
//! them at a mock server.

use crate::core::SaError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// News API base (query parameters are appended).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://min-api.cryptocompare.com/data/v2/news/";

/// Chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

#[derive(Debug, Clone)]
pub struct SaClient {
    http: Client,
    base_news: Url,
    base_chart: Url,
}

impl Default for SaClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl SaClient {
    /// Create a new builder.
    pub fn builder() -> SaClientBuilder {
        SaClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SaClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    base_chart: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SaClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news API base (e.g. `https://min-api.cryptocompare.com/data/v2/news/`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the chart API base (e.g. `https://query1.finance.yahoo.com/v8/finance/chart/`).
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<SaClient, SaError> {
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);
        let base_chart = self.base_chart.unwrap_or(Url::parse(DEFAULT_BASE_CHART)?);

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(SaClient {
            http,
            base_news,
            base_chart,
        })
    }
}
