use std::time::Duration;

use httpmock::{Method::GET, MockServer};
use url::Url;

use sentalign::{NewsWalkerBuilder, SaClient, StopReason};

fn client_for(server: &MockServer) -> SaClient {
    SaClient::builder()
        .base_news(Url::parse(&format!("{}/data/v2/news/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

fn walker(client: &SaClient) -> NewsWalkerBuilder {
    // No throttling in tests.
    NewsWalkerBuilder::new(client).page_delay(Duration::ZERO)
}

#[tokio::test]
async fn walk_paginates_backward_until_empty_page() {
    let server = MockServer::start();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param("lang", "EN")
            .query_param("sortOrder", "latest")
            .query_param_missing("lTs");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::news_page(&[
                (1200, "https://e.com/3", "c", "z"),
                (1100, "https://e.com/2", "b", "y"),
                (1000, "https://e.com/1", "a", "x"),
            ]));
    });

    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param("lTs", "1000");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::news_page(&[
                (950, "https://e.com/0", "older", "w"),
                (900, "https://e.com/-1", "oldest", "v"),
            ]));
    });

    let third = server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param("lTs", "900");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::news_page(&[]));
    });

    let report = walker(&client_for(&server)).target_count(100).walk().await;

    first.assert();
    second.assert();
    third.assert();

    assert_eq!(report.stopped, StopReason::EmptyPage);
    assert_eq!(report.articles.len(), 5);
    assert_eq!(report.pages, 2);
    // Arrival order is newest first.
    assert_eq!(report.articles[0].published_at, 1200);
    assert_eq!(report.articles[4].published_at, 900);
}

#[tokio::test]
async fn walk_stops_once_target_is_reached() {
    let server = MockServer::start();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param_missing("lTs");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::news_page(&[
                (1200, "https://e.com/3", "c", "z"),
                (1100, "https://e.com/2", "b", "y"),
                (1000, "https://e.com/1", "a", "x"),
            ]));
    });

    let report = walker(&client_for(&server)).target_count(3).walk().await;

    first.assert_hits(1);
    assert_eq!(report.stopped, StopReason::TargetReached);
    assert_eq!(report.articles.len(), 3);
}

#[tokio::test]
async fn transport_failure_keeps_partial_results() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param_missing("lTs");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::news_page(&[
                (1200, "https://e.com/3", "c", "z"),
                (1000, "https://e.com/1", "a", "x"),
            ]));
    });

    let failing = server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param("lTs", "1000");
        then.status(500);
    });

    let report = walker(&client_for(&server)).target_count(100).walk().await;

    failing.assert_hits(1);
    assert_eq!(report.articles.len(), 2, "accumulated pages are kept");
    assert!(matches!(report.stopped, StopReason::SourceError(_)));
}

#[tokio::test]
async fn source_error_status_is_treated_as_end_of_data() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param_missing("lTs");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::news_page(&[(
                1000,
                "https://e.com/1",
                "a",
                "x",
            )]));
    });

    server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param("lTs", "1000");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::news_error(2, "rate limit exceeded"));
    });

    let report = walker(&client_for(&server)).target_count(100).walk().await;

    assert_eq!(report.articles.len(), 1);
    match report.stopped {
        StopReason::SourceError(cause) => assert!(cause.contains("rate limit exceeded")),
        other => panic!("expected SourceError, got {other:?}"),
    }
}

#[tokio::test]
async fn echoed_page_stops_the_walk() {
    let server = MockServer::start();

    let page = crate::common::news_page(&[
        (1100, "https://e.com/2", "b", "y"),
        (1000, "https://e.com/1", "a", "x"),
    ]);

    server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param_missing("lTs");
        then.status(200)
            .header("content-type", "application/json")
            .body(page.clone());
    });

    // The source echoes the same page instead of an older one.
    let echoed = server.mock(|when, then| {
        when.method(GET)
            .path("/data/v2/news/")
            .query_param("lTs", "1000");
        then.status(200)
            .header("content-type", "application/json")
            .body(page.clone());
    });

    let report = walker(&client_for(&server)).target_count(100).walk().await;

    echoed.assert_hits(1);
    assert_eq!(report.stopped, StopReason::CursorStalled);
}
