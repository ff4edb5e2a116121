use crate::{
    core::{SaClient, SaError},
    prices::{
        model::{Granularity, PriceBar},
        wire,
    },
};

pub(super) async fn fetch_bars(
    client: &SaClient,
    symbol: &str,
    period: (i64, i64),
    granularity: Granularity,
) -> Result<Vec<PriceBar>, SaError> {
    let (p1, p2) = period;
    if p1 >= p2 {
        return Err(SaError::InvalidDates);
    }

    let mut url = client.base_chart().join(symbol)?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("period1", &p1.to_string());
        qp.append_pair("period2", &p2.to_string());
        qp.append_pair("interval", granularity.as_str());
    }

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(SaError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    decode_chart(&body)
}

fn decode_chart(body: &str) -> Result<Vec<PriceBar>, SaError> {
    let parsed: wire::ChartEnvelope =
        serde_json::from_str(body).map_err(|e| SaError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| SaError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(SaError::Data(format!(
            "chart error: {} - {}",
            err.code, err.description
        )));
    }

    let mut results = chart
        .result
        .ok_or_else(|| SaError::Data("missing result".into()))?;

    let r0 = results
        .pop()
        .ok_or_else(|| SaError::Data("empty result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    let quote = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| SaError::Data("missing quote".into()))?;

    let mut bars = Vec::with_capacity(ts.len());
    for (i, &t) in ts.iter().enumerate() {
        // Rows without a close carry no price information; drop them.
        let Some(close) = quote.close.get(i).and_then(|x| *x) else {
            continue;
        };
        let volume = quote.volume.get(i).and_then(|x| *x).unwrap_or(0);
        bars.push(PriceBar {
            ts: t,
            close,
            volume,
        });
    }

    Ok(bars)
}
