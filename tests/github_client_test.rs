//! Integration tests for the GitHub discussion search client.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use hiring_board::config::Config;
use hiring_board::date::Month;
use hiring_board::github::{DiscussionKind, DiscussionSearch, GithubClient, SearchError};
use hiring_board::posts::DiscussionFetcher;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test configuration pointing at the mock server.
fn create_test_config(server: &MockServer) -> Config {
    Config {
        github_graphql_url: format!("{}/graphql", server.uri()),
        ..Config::for_testing()
    }
}

fn comment(n: u32, header: &str, minimized: bool) -> serde_json::Value {
    json!({
        "publishedAt": format!("2022-03-0{n}T10:00:00Z"),
        "updatedAt": format!("2022-03-0{n}T12:00:00Z"),
        "url": format!("https://github.com/vercel/next.js/discussions/34000#discussioncomment-{n}"),
        "body": format!("{header}\n\nDetails for post {n}."),
        "bodyText": format!("{header}\nDetails for post {n}."),
        "bodyHTML": format!("<p dir=\"auto\">{header}</p>\n<p dir=\"auto\">Details for post {n}.</p>"),
        "isMinimized": minimized,
    })
}

/// A March 2022 hiring discussion with three comments, the second minimized.
fn march_discussion() -> serde_json::Value {
    json!({
        "data": { "search": { "nodes": [
            {
                "title": "Who's hiring? (Mar 2022)",
                "comments": { "nodes": [
                    comment(1, "Acme | Remote | Full-time | <a href=\"https://acme.example/jobs\">apply</a>", false),
                    comment(2, "Spam Inc | Scam | link", true),
                    comment(3, "Globex | Onsite | link", false),
                ]}
            }
        ]}}
    })
}

#[tokio::test]
async fn test_search_sends_scoped_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "variables": {
                "search": "repo:vercel/next.js \"(Who's hiring? Mar 2022)\"",
                "first": 1,
                "comments": 50,
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(march_discussion()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let discussions = client
        .search_discussions("(Who's hiring? Mar 2022)", 1)
        .await
        .expect("Search failed");

    assert_eq!(discussions.len(), 1);
    assert_eq!(
        discussions[0].title.as_deref(),
        Some("Who's hiring? (Mar 2022)")
    );
    assert_eq!(discussions[0].comments().count(), 3);
}

#[tokio::test]
async fn test_non_discussion_nodes_are_kept_in_position() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "search": { "nodes": [{}, null] } }
        })))
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let discussions = client.search_discussions("anything", 2).await.unwrap();

    assert_eq!(discussions.len(), 2);
    assert!(discussions.iter().all(|d| !d.has_comments()));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials"))
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let err = client.search_discussions("anything", 1).await.unwrap_err();

    match err {
        SearchError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Bad credentials");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_graphql_errors_without_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "API rate limit exceeded" }]
        })))
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let err = client.search_discussions("anything", 1).await.unwrap_err();

    assert!(matches!(&err, SearchError::GraphQl(messages) if messages == &["API rate limit exceeded"]));
}

#[tokio::test]
async fn test_partial_data_with_errors_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "search": { "nodes": [{ "title": "Who's hiring? (Mar 2022)" }] } },
            "errors": [{ "message": "Something went wrong" }]
        })))
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let discussions = client.search_discussions("anything", 1).await.unwrap();

    assert_eq!(discussions.len(), 1);
    assert!(!discussions[0].has_comments());
}

#[tokio::test]
async fn test_missing_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let err = client.search_discussions("anything", 1).await.unwrap_err();

    assert!(matches!(err, SearchError::MissingData));
}

#[tokio::test]
async fn test_fetch_hiring_posts_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(march_discussion()))
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let fetcher = DiscussionFetcher::new(Arc::new(client));

    let now = Utc.with_ymd_and_hms(2022, 3, 20, 0, 0, 0).unwrap();
    let posts = fetcher
        .hiring_posts(Month::new(2022, 3).unwrap(), now)
        .await
        .expect("Fetch failed");

    // Minimized comment dropped, remaining posts newest first
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].company_name, "Globex");
    assert_eq!(posts[0].keywords, vec!["Onsite"]);
    assert_eq!(
        posts[0].contact_url,
        "https://github.com/vercel/next.js/discussions/34000#discussioncomment-3"
    );

    assert_eq!(posts[1].company_name, "Acme");
    assert_eq!(posts[1].keywords, vec!["Remote", "Full-time"]);
    assert_eq!(posts[1].contact_url, "https://acme.example/jobs");
    assert_eq!(posts[1].body_text, "Details for post 1.");
}

#[tokio::test]
async fn test_fetch_empty_search_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "search": { "nodes": [] } }
        })))
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let fetcher = DiscussionFetcher::new(Arc::new(client));

    let posts = fetcher
        .fetch(Month::new(2022, 3).unwrap(), DiscussionKind::LookingForWork, 1)
        .await
        .unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_invalid_month_does_not_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = GithubClient::new(&create_test_config(&server)).unwrap();
    let fetcher = DiscussionFetcher::new(Arc::new(client));

    let now = Utc.with_ymd_and_hms(2022, 3, 20, 0, 0, 0).unwrap();
    let before_epoch = fetcher
        .hiring_posts(Month::new(2021, 10).unwrap(), now)
        .await
        .unwrap();
    let future = fetcher
        .hiring_posts(Month::new(2022, 4).unwrap(), now)
        .await
        .unwrap();

    assert!(before_epoch.is_empty());
    assert!(future.is_empty());
}
