use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use docchat_engine::{ingest_all, BackendSettings, FailureKind, ReqwestBackend};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn urls(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn ingested_urls(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            body["url"].as_str().unwrap().to_string()
        })
        .collect()
}

/// Records when each ingest request arrived, then answers after `delay`.
struct ArrivalRecorder {
    arrivals: Arc<Mutex<Vec<(String, Instant)>>>,
    delay: Duration,
}

impl Respond for ArrivalRecorder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let url = body["url"].as_str().unwrap_or_default().to_string();
        self.arrivals.lock().unwrap().push((url, Instant::now()));
        ResponseTemplate::new(200).set_delay(self.delay)
    }
}

#[tokio::test]
async fn empty_list_issues_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(BackendSettings::new(server.uri()));
    let count = ingest_all(&backend, &[]).await.expect("nothing to fail");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn requests_are_issued_one_at_a_time_in_order() {
    let server = MockServer::start().await;
    let arrivals = Arc::new(Mutex::new(Vec::new()));
    let delay = Duration::from_millis(100);
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ArrivalRecorder {
            arrivals: arrivals.clone(),
            delay,
        })
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(BackendSettings::new(server.uri()));
    let list = urls(&[
        "https://u1.example.com",
        "https://u2.example.com",
        "https://u3.example.com",
    ]);
    let count = ingest_all(&backend, &list).await.expect("all ingested");
    assert_eq!(count, 3);

    let arrivals = arrivals.lock().unwrap().clone();
    let order: Vec<&str> = arrivals.iter().map(|(url, _)| url.as_str()).collect();
    assert_eq!(order, list.iter().map(String::as_str).collect::<Vec<_>>());
    // Each request waits for the previous response, which is held for `delay`.
    for pair in arrivals.windows(2) {
        let gap = pair[1].1.duration_since(pair[0].1);
        assert!(gap >= delay, "request issued {gap:?} after the previous one");
    }
}

#[tokio::test]
async fn first_failure_aborts_remaining_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .and(body_json(json!({ "url": "https://u2.example.com" })))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(BackendSettings::new(server.uri()));
    let list = urls(&[
        "https://u1.example.com",
        "https://u2.example.com",
        "https://u3.example.com",
    ]);
    let err = ingest_all(&backend, &list).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(
        ingested_urls(&server).await,
        urls(&["https://u1.example.com", "https://u2.example.com"])
    );
}

#[tokio::test]
async fn duplicates_are_submitted_as_given() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(BackendSettings::new(server.uri()));
    let list = urls(&["https://a.example.com", "https://a.example.com"]);
    assert_eq!(ingest_all(&backend, &list).await.unwrap(), 2);
    assert_eq!(ingested_urls(&server).await, list);
}
