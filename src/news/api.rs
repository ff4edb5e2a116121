use crate::{
    core::{SaClient, SaError},
    news::{model::NewsArticle, wire},
};

/// Fetch a single page of articles older than `cursor` (newest first).
///
/// `cursor` is omitted on the first request, which returns the latest page.
pub(super) async fn fetch_page(
    client: &SaClient,
    language: &str,
    cursor: Option<i64>,
) -> Result<Vec<NewsArticle>, SaError> {
    let mut url = client.base_news().clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("lang", language);
        qp.append_pair("sortOrder", "latest");
        if let Some(ts) = cursor {
            qp.append_pair("lTs", &ts.to_string());
        }
    }

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(SaError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    decode_page(&body)
}

fn decode_page(body: &str) -> Result<Vec<NewsArticle>, SaError> {
    let envelope: wire::NewsEnvelope =
        serde_json::from_str(body).map_err(|e| SaError::Data(format!("json parse error: {e}")))?;

    if envelope.type_code != Some(wire::TYPE_SUCCESS) {
        return Err(SaError::Data(format!(
            "news source error: {}",
            envelope.message.as_deref().unwrap_or("no message")
        )));
    }

    let results = envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| {
            // Items without a URL or publish time cannot be deduplicated or
            // bucketed; skip them.
            let url = raw.url?;
            let published_at = raw.published_on?;

            Some(NewsArticle {
                title: raw.title.unwrap_or_default(),
                url,
                body: raw.body.unwrap_or_default(),
                published_at,
                source: raw.source.unwrap_or_default(),
            })
        })
        .collect();

    Ok(results)
}
