use chrono::{TimeZone, Utc};
use httpmock::{Method::GET, MockServer};
use url::Url;

use sentalign::{Granularity, PriceBarsBuilder, SaClient, SaError};

fn client_for(server: &MockServer) -> SaClient {
    SaClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

fn utc(ts: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(ts, 0).unwrap()
}

#[tokio::test]
async fn fetch_encodes_period_and_interval() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/ETH-USD")
            .query_param("period1", "3600")
            .query_param("period2", "10800")
            .query_param("interval", "1h");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::chart_page(&[
                (3600, 1900.5, 10),
                (7200, 1901.0, 20),
            ]));
    });

    let bars = PriceBarsBuilder::new(&client_for(&server), "ETH-USD")
        .between(utc(3600), utc(10800))
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].ts, 3600);
    assert_eq!(bars[0].close, 1900.5);
    assert_eq!(bars[1].volume, 20);
}

#[tokio::test]
async fn empty_hourly_series_falls_back_to_daily_once() {
    let server = MockServer::start();

    let hourly = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/ETH-USD")
            .query_param("interval", "1h");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::chart_empty());
    });

    let daily = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/ETH-USD")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::chart_page(&[(0, 1850.0, 1000)]));
    });

    let (bars, granularity) = PriceBarsBuilder::new(&client_for(&server), "ETH-USD")
        .between(utc(0), utc(86_400))
        .fetch_with_fallback()
        .await
        .unwrap();

    hourly.assert_hits(1);
    daily.assert_hits(1);
    assert_eq!(granularity, Granularity::Daily);
    assert_eq!(bars.len(), 1);
}

#[tokio::test]
async fn empty_series_at_both_granularities_is_fatal() {
    let server = MockServer::start();

    let hourly = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/ETH-USD")
            .query_param("interval", "1h");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::chart_empty());
    });

    let daily = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/ETH-USD")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::chart_empty());
    });

    let err = PriceBarsBuilder::new(&client_for(&server), "ETH-USD")
        .between(utc(0), utc(86_400))
        .fetch_with_fallback()
        .await
        .unwrap_err();

    hourly.assert_hits(1);
    daily.assert_hits(1);
    assert!(matches!(err, SaError::EmptyData(_)));
}

#[tokio::test]
async fn http_status_error_surfaces() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/ETH-USD");
        then.status(503);
    });

    let err = PriceBarsBuilder::new(&client_for(&server), "ETH-USD")
        .between(utc(0), utc(86_400))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, SaError::Status { status: 503, .. }));
}

#[tokio::test]
async fn inverted_period_is_rejected_before_any_request() {
    let server = MockServer::start();

    let err = PriceBarsBuilder::new(&client_for(&server), "ETH-USD")
        .between(utc(86_400), utc(0))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, SaError::InvalidDates));
}
