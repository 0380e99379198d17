//! End-to-end rank checks: raw text → pairs → Serper lookups → CSV.
//!
//! The Serper API is replaced by a local mock server; no real API calls
//! are made.

use std::sync::{Arc, Mutex};

use blogrank::export::to_csv;
use blogrank::{
    BatchState, ProgressCallback, ProgressEvent, RankChecker, RankStatus, parse_pairs,
};
use blogrank_search::{SearchConfig, SerperEngine};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn engine_for(server: &MockServer) -> SerperEngine {
    let config = SearchConfig::new("test-key")
        .with_base_url(server.uri())
        .with_timeout_secs(2);
    SerperEngine::new(config).unwrap_or_else(|e| panic!("engine: {e}"))
}

fn recording_callback() -> (ProgressCallback, Arc<Mutex<Vec<u8>>>) {
    let percents: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let percents_clone = Arc::clone(&percents);
    let callback: ProgressCallback = Box::new(move |event| {
        if let ProgressEvent::PairChecked { percent, .. } = event {
            let Ok(mut guard) = percents_clone.lock() else {
                return;
            };
            guard.push(percent);
        }
    });
    (callback, percents)
}

async fn mount_answer(server: &MockServer, query: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("X-API-KEY", "test-key"))
        .and(body_partial_json(json!({ "q": query })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn found_then_lookup_error() {
    let server = MockServer::start().await;
    mount_answer(
        &server,
        "a",
        ResponseTemplate::new(200).set_body_json(json!({
            "organic": [{"title": "A", "link": "https://x.com/a", "position": 3}]
        })),
    )
    .await;
    mount_answer(&server, "b", ResponseTemplate::new(500)).await;

    let pairs = parse_pairs("a,https://x.com/a\nb,https://x.com/b");
    let checker = RankChecker::new(engine_for(&server));
    let (callback, percents) = recording_callback();

    let state = checker
        .run(BatchState::new(pairs), Some(&callback), &CancellationToken::new())
        .await;

    assert!(state.is_complete());
    assert_eq!(state.progress(), Some(100));
    let results = state.into_results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].keyword, "a");
    assert_eq!(results[0].url, "https://x.com/a");
    assert_eq!(results[0].rank, RankStatus::Found(3));
    assert_eq!(results[1].keyword, "b");
    assert_eq!(results[1].url, "https://x.com/b");
    assert_eq!(results[1].rank, RankStatus::LookupError);

    let percents = percents.lock().unwrap_or_else(|e| e.into_inner());
    assert_eq!(*percents, vec![50, 100]);
}

#[tokio::test]
async fn mixed_batch_exports_csv_in_input_order() {
    let server = MockServer::start().await;
    mount_answer(
        &server,
        "apple inc",
        ResponseTemplate::new(200).set_body_json(json!({
            "organic": [
                {"link": "https://www.apple.com/", "position": 1},
                {"link": "https://example.com/apple", "position": 4}
            ]
        })),
    )
    .await;
    mount_answer(
        &server,
        "google search",
        ResponseTemplate::new(200).set_body_json(json!({
            "organic": [{"link": "https://example.com/google/", "position": 2}]
        })),
    )
    .await;
    mount_answer(
        &server,
        "openai",
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;
    mount_answer(
        &server,
        "nothing",
        ResponseTemplate::new(200).set_body_json(json!({"searchParameters": {}})),
    )
    .await;

    let raw = "apple inc,https://example.com/apple\n\
               \n\
               malformed line\n\
               google search,https://example.com/google\n\
               openai,https://example.com/openai\n\
               nothing,https://example.com/nothing\n";
    let results = RankChecker::new(engine_for(&server))
        .check(parse_pairs(raw))
        .await;

    assert_eq!(
        to_csv(&results),
        "Keyword,Blog URL,Organic Rank\n\
         apple inc,https://example.com/apple,#4\n\
         google search,https://example.com/google,Not Found\n\
         openai,https://example.com/openai,Error\n\
         nothing,https://example.com/nothing,Not Found\n"
    );
    assert!(
        results[2]
            .error
            .as_deref()
            .unwrap_or_default()
            .contains("parse error")
    );
}

#[tokio::test]
async fn unauthorized_key_marks_every_row_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Unauthorized."})))
        .expect(3)
        .mount(&server)
        .await;

    let results = RankChecker::new(engine_for(&server))
        .check(parse_pairs("one,u1\ntwo,u2\nthree,u3"))
        .await;

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.rank == RankStatus::LookupError));
    assert!(results.iter().all(|r| {
        r.error
            .as_deref()
            .is_some_and(|msg| msg.contains("403") && !msg.contains("test-key"))
    }));
}

#[tokio::test]
async fn empty_input_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = RankChecker::new(engine_for(&server))
        .run(
            BatchState::new(parse_pairs("\n  \nno comma\n")),
            None,
            &CancellationToken::new(),
        )
        .await;

    assert!(state.results().is_empty());
    assert_eq!(state.progress(), None);
}
