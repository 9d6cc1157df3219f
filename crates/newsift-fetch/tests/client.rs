//! Integration tests for `NewsClient` using wiremock HTTP mocks.

use chrono::NaiveDate;
use newsift_fetch::{FetchError, NewsClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn test_client(base_url: &str) -> NewsClient {
    NewsClient::new(base_url, "test-token", 10, 2, 0).expect("client construction should not fail")
}

fn article_json(id: i64, headline: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "headline": headline,
        "summary": format!("summary for {headline}"),
        "datetime": 1_750_000_000 + id,
        "source": "wire",
        "url": format!("https://news.example.com/{id}")
    })
}

#[tokio::test]
async fn fetch_company_news_parses_article_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company-news"))
        .and(query_param("symbol", "AAPL"))
        .and(query_param("from", "2025-06-01"))
        .and(query_param("to", "2025-06-07"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            article_json(1, "Apple beats earnings"),
            article_json(2, "Apple launches product"),
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .fetch_company_news("AAPL", day("2025-06-01"), day("2025-06-07"))
        .await
        .expect("should parse news array");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].headline.as_deref(), Some("Apple beats earnings"));
}

#[tokio::test]
async fn fetch_company_news_surfaces_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company-news"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_company_news("AAPL", day("2025-06-01"), day("2025-06-07"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::UnexpectedStatus { status: 401, .. }));
}

#[tokio::test]
async fn fetch_chunked_retries_transient_500() {
    let server = MockServer::start().await;

    // First attempt fails with 500, retry succeeds.
    Mock::given(method("GET"))
        .and(path("/company-news"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/company-news"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([article_json(1, "Apple beats earnings")])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .fetch_chunked("AAPL", day("2025-06-01"), day("2025-06-05"), 7)
        .await
        .expect("retry should recover from a transient 500");

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn fetch_chunked_issues_one_request_per_chunk_and_merges_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company-news"))
        .and(query_param("from", "2025-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            article_json(1, "Apple beats earnings"),
            article_json(2, "Apple launches product"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/company-news"))
        .and(query_param("from", "2025-06-08"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            // id 2 also appears in the first chunk; merge must keep one copy.
            article_json(2, "Apple launches product"),
            article_json(3, "Apple analyst rating"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .fetch_chunked("AAPL", day("2025-06-01"), day("2025-06-14"), 7)
        .await
        .unwrap();

    let mut ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3], "ids must be merged and deduplicated");
}

#[tokio::test]
async fn fetch_chunked_tolerates_partial_chunk_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company-news"))
        .and(query_param("from", "2025-06-01"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([article_json(1, "Apple beats earnings")])),
        )
        .mount(&server)
        .await;
    // Second chunk always 404s — not retriable, but partial-tolerated.
    Mock::given(method("GET"))
        .and(path("/company-news"))
        .and(query_param("from", "2025-06-08"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .fetch_chunked("AAPL", day("2025-06-01"), day("2025-06-14"), 7)
        .await
        .expect("partial chunk failure must not abort the fetch");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
}

#[tokio::test]
async fn fetch_chunked_fails_when_all_chunks_fail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company-news"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_chunked("AAPL", day("2025-06-01"), day("2025-06-14"), 7)
        .await
        .unwrap_err();

    assert!(
        matches!(err, FetchError::AllChunksFailed { ref symbol, chunks: 2, .. } if symbol == "AAPL"),
        "expected AllChunksFailed, got: {err:?}"
    );
}
