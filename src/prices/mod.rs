mod api;
mod model;
mod wire;

pub use model::{Granularity, PriceBar};

use tracing::warn;

use crate::core::{SaClient, SaError};

/// A builder for fetching price bars for a single symbol over an absolute
/// time range.
pub struct PriceBarsBuilder {
    client: SaClient,
    symbol: String,
    period: Option<(i64, i64)>,
    granularity: Granularity,
}

impl PriceBarsBuilder {
    /// Creates a new `PriceBarsBuilder` for a given symbol, defaulting to
    /// hourly granularity.
    pub fn new(client: &SaClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            period: None,
            granularity: Granularity::Hourly,
        }
    }

    /// Sets the absolute time period for the request.
    #[must_use]
    pub fn between(
        mut self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.period = Some((start.timestamp(), end.timestamp()));
        self
    }

    /// Sets the bar width requested from the source.
    #[must_use]
    pub const fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Executes the request at the configured granularity.
    ///
    /// # Errors
    ///
    /// Returns a `SaError` if no period was set, the request fails, or the
    /// response cannot be decoded. An empty series is *not* an error here;
    /// see [`fetch_with_fallback`](Self::fetch_with_fallback).
    pub async fn fetch(self) -> Result<Vec<PriceBar>, SaError> {
        let period = self.period()?;
        api::fetch_bars(&self.client, &self.symbol, period, self.granularity).await
    }

    /// Executes the request, falling back to the next coarser granularity
    /// once if the configured one yields an empty series.
    ///
    /// # Errors
    ///
    /// Returns [`SaError::EmptyData`] when no bars are obtainable at any
    /// granularity (fatal for the pipeline), and propagates request/decode
    /// failures as in [`fetch`](Self::fetch).
    pub async fn fetch_with_fallback(self) -> Result<(Vec<PriceBar>, Granularity), SaError> {
        let period = self.period()?;

        let bars = api::fetch_bars(&self.client, &self.symbol, period, self.granularity).await?;
        if !bars.is_empty() {
            return Ok((bars, self.granularity));
        }

        let Some(coarser) = self.granularity.coarser() else {
            return Err(SaError::EmptyData(format!(
                "no {} bars for {}",
                self.granularity.as_str(),
                self.symbol
            )));
        };

        warn!(
            symbol = %self.symbol,
            from = self.granularity.as_str(),
            to = coarser.as_str(),
            "empty price series, falling back to coarser granularity"
        );

        let bars = api::fetch_bars(&self.client, &self.symbol, period, coarser).await?;
        if bars.is_empty() {
            return Err(SaError::EmptyData(format!(
                "no price bars for {} at any granularity",
                self.symbol
            )));
        }
        Ok((bars, coarser))
    }

    fn period(&self) -> Result<(i64, i64), SaError> {
        self.period
            .ok_or_else(|| SaError::Data("no period set".into()))
    }
}
