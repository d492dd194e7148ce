//! Tests for engine module

use super::*;
use crate::error::{Error, ErrorCategory};
use crate::types::{Page, DEFAULT_PERMALINK_BASE};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::Mutex;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Scripted Fetcher
// ============================================================================

/// Replays queued responses and records every call
struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<Page>>>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedFetcher {
    fn new(responses: Vec<Result<Page>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::default(),
        }
    }

    fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch(&self, username: &str, cursor: Option<&str>) -> Result<Page> {
        self.calls
            .lock()
            .unwrap()
            .push((username.to_string(), cursor.map(str::to_string)));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("fetch called more often than scripted")
    }
}

fn comment(id: &str, body: &str, permalink: Option<&str>) -> RawComment {
    RawComment::new(id, Some(body.to_string()), permalink, DEFAULT_PERMALINK_BASE)
}

fn page(comments: Vec<RawComment>, after: Option<&str>) -> Page {
    Page::new(comments, after.map(str::to_string))
}

fn transport_error() -> Error {
    Error::http_status(503, "Service Unavailable")
}

// ============================================================================
// Collection Loop Tests
// ============================================================================

#[tokio::test]
async fn test_collect_two_pages() {
    let fetcher = ScriptedFetcher::new(vec![
        Ok(page(
            vec![
                comment("1", "check this youtu.be/xyz", Some("/r/a/comments/1/x/")),
                comment("2", "nothing to see", Some("/r/a/comments/2/x/")),
            ],
            Some("t1_2"),
        )),
        Ok(page(
            vec![comment("3", "https://www.YouTube.com/watch?v=q", None)],
            None,
        )),
    ]);

    let collector = CommentCollector::new(fetcher);
    let results = collector.collect_all("alice").await.unwrap();

    assert_eq!(
        results.as_slice(),
        &[
            FilteredComment {
                uri: Some("https://reddit.com/r/a/comments/1/x/".to_string()),
                body: "check this youtu.be/xyz".to_string(),
            },
            FilteredComment {
                uri: None,
                body: "https://www.YouTube.com/watch?v=q".to_string(),
            },
        ]
    );

    assert_eq!(
        collector.fetcher().calls(),
        vec![
            ("alice".to_string(), None),
            ("alice".to_string(), Some("t1_2".to_string())),
        ]
    );
}

#[tokio::test]
async fn test_single_page_stops_on_null_cursor() {
    let fetcher = ScriptedFetcher::new(vec![Ok(page(
        vec![comment("1", "youtube.com", None)],
        None,
    ))]);

    let collector = CommentCollector::new(fetcher);
    let results = collector.collect_all("bob").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(collector.fetcher().calls().len(), 1);
}

#[tokio::test]
async fn test_empty_cursor_ends_collection() {
    let fetcher = ScriptedFetcher::new(vec![Ok(page(vec![], Some("")))]);

    let collector = CommentCollector::new(fetcher);
    let results = collector.collect_all("bob").await.unwrap();

    assert!(results.is_empty());
    assert_eq!(collector.fetcher().calls().len(), 1);
}

#[tokio::test]
async fn test_order_preserved_across_pages() {
    let pages: Vec<Result<Page>> = (0..5)
        .map(|i| {
            let after = (i < 4).then(|| format!("t1_{i}"));
            Ok(Page::new(
                vec![
                    comment(&format!("{i}a"), &format!("youtu.be/{i}a"), None),
                    comment(&format!("{i}b"), "plain", None),
                    comment(&format!("{i}c"), &format!("YOUTUBE.COM/{i}c"), None),
                ],
                after,
            ))
        })
        .collect();

    let collector = CommentCollector::new(ScriptedFetcher::new(pages));
    let (results, stats) = collector.collect_all_with_stats("carol").await.unwrap();

    let bodies: Vec<&str> = results.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(
        bodies,
        vec![
            "youtu.be/0a", "YOUTUBE.COM/0c", "youtu.be/1a", "YOUTUBE.COM/1c", "youtu.be/2a",
            "YOUTUBE.COM/2c", "youtu.be/3a", "YOUTUBE.COM/3c", "youtu.be/4a", "YOUTUBE.COM/4c",
        ]
    );

    assert_eq!(stats.pages_fetched, 5);
    assert_eq!(stats.comments_seen, 15);
    assert_eq!(stats.comments_matched, 10);
    assert!(!stats.truncated);

    let cursors: Vec<Option<String>> = collector
        .fetcher()
        .calls()
        .into_iter()
        .map(|(_, cursor)| cursor)
        .collect();
    assert_eq!(
        cursors,
        vec![
            None,
            Some("t1_0".to_string()),
            Some("t1_1".to_string()),
            Some("t1_2".to_string()),
            Some("t1_3".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_multiline_body_matches() {
    let fetcher = ScriptedFetcher::new(vec![Ok(page(
        vec![comment("1", "line one\r\nline two\nhttps://youtu.be/abc\nbye", None)],
        None,
    ))]);

    let results = CommentCollector::new(fetcher).collect_all("dave").await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_null_body_is_skipped() {
    let fetcher = ScriptedFetcher::new(vec![Ok(page(
        vec![
            RawComment::new("1", None, Some("/r/a/"), DEFAULT_PERMALINK_BASE),
            comment("2", "", None),
        ],
        None,
    ))]);

    let results = CommentCollector::new(fetcher).collect_all("erin").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_custom_filter() {
    let fetcher = ScriptedFetcher::new(vec![Ok(page(
        vec![
            comment("1", "youtu.be/x", None),
            comment("2", "vimeo.com/1", None),
        ],
        None,
    ))]);

    let collector =
        CommentCollector::new(fetcher).with_filter(ContentFilter::for_hosts(["vimeo.com"]).unwrap());
    let results = collector.collect_all("frank").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results.as_slice()[0].body, "vimeo.com/1");
}

// ============================================================================
// Failure Propagation Tests
// ============================================================================

#[tokio::test]
async fn test_transport_failure_on_second_fetch_aborts() {
    let fetcher = ScriptedFetcher::new(vec![
        Ok(page(vec![comment("1", "youtu.be/xyz", None)], Some("t1_2"))),
        Err(transport_error()),
    ]);

    let collector = CommentCollector::new(fetcher);
    let err = collector.collect_all("alice").await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::TransportFailure);
    assert_eq!(collector.fetcher().calls().len(), 2);
}

#[tokio::test]
async fn test_malformed_response_aborts() {
    let fetcher = ScriptedFetcher::new(vec![Err(Error::malformed("missing field `data`"))]);

    let err = CommentCollector::new(fetcher)
        .collect_all("alice")
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::MalformedResponse);
}

// ============================================================================
// Page Cap Tests
// ============================================================================

#[test]
fn test_collect_config_default() {
    let config = CollectConfig::default();
    assert!(config.max_pages.is_none());
    assert_eq!(CollectConfig::new().with_max_pages(3).max_pages, Some(3));
}

#[tokio::test]
async fn test_max_pages_stops_early() {
    let fetcher = ScriptedFetcher::new(vec![
        Ok(page(vec![comment("1", "youtu.be/1", None)], Some("t1_1"))),
        Ok(page(vec![comment("2", "youtu.be/2", None)], Some("t1_2"))),
    ]);

    let collector =
        CommentCollector::new(fetcher).with_config(CollectConfig::new().with_max_pages(2));
    let (results, stats) = collector.collect_all_with_stats("gina").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(stats.pages_fetched, 2);
    assert!(stats.truncated);
    assert_eq!(collector.fetcher().calls().len(), 2);
}

#[tokio::test]
async fn test_max_pages_not_reached() {
    let fetcher = ScriptedFetcher::new(vec![Ok(page(vec![], None))]);

    let collector =
        CommentCollector::new(fetcher).with_config(CollectConfig::new().with_max_pages(10));
    let (_, stats) = collector.collect_all_with_stats("gina").await.unwrap();

    assert_eq!(stats.pages_fetched, 1);
    assert!(!stats.truncated);
}

// ============================================================================
// ListingFetcher Tests
// ============================================================================

fn listing_fetcher(base: &str) -> ListingFetcher {
    let config = crate::config::CollectorConfig {
        api_base_url: base.to_string(),
        ..Default::default()
    };
    ListingFetcher::from_config(&config).unwrap()
}

#[test]
fn test_comments_url() {
    let fetcher = listing_fetcher("https://api.reddit.com");
    assert_eq!(
        fetcher.comments_url("alice").unwrap().as_str(),
        "https://api.reddit.com/user/alice/comments"
    );

    let fetcher = listing_fetcher("https://api.reddit.com/");
    assert_eq!(
        fetcher.comments_url("a b").unwrap().as_str(),
        "https://api.reddit.com/user/a%20b/comments"
    );
}

#[tokio::test]
async fn test_listing_fetcher_first_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/alice/comments"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "Listing",
            "data": {
                "after": "t1_2",
                "children": [
                    {"kind": "t1", "data": {"id": "1", "body": "youtu.be/xyz", "permalink": "/r/a/comments/1/x/"}}
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = listing_fetcher(&mock_server.uri());
    let page = fetcher.fetch("alice", None).await.unwrap();

    assert_eq!(page.after(), Some("t1_2"));
    assert_eq!(page.comments().len(), 1);
    assert_eq!(
        page.comments()[0].permalink(),
        Some("https://reddit.com/r/a/comments/1/x/")
    );
}

#[tokio::test]
async fn test_listing_fetcher_sends_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/alice/comments"))
        .and(query_param("after", "t1_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "Listing",
            "data": {"after": null, "children": []}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = listing_fetcher(&mock_server.uri());
    let page = fetcher.fetch("alice", Some("t1_2")).await.unwrap();

    assert!(page.after().is_none());
}

#[tokio::test]
async fn test_listing_fetcher_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/alice/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "Listing"
        })))
        .mount(&mock_server)
        .await;

    let err = listing_fetcher(&mock_server.uri())
        .fetch("alice", None)
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::MalformedResponse);
}
