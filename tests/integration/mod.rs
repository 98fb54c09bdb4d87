//! Integration tests for the HTTP service and client.
//!
//! Each test binds the router to an ephemeral loopback port and talks to it
//! over real HTTP.

use std::net::SocketAddr;

use bhvr_server::api::{self, AppState};
use bhvr_server::client::{HelloClient, HelloView};
use bhvr_server::config::Config;
use bhvr_server::error::ClientError;
use bhvr_server::types::{GreetingResponse, TestResponse, VersionResponse};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Running server; stops when dropped.
struct TestServer {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    async fn start(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            api::serve(listener, state, async {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            addr,
            _shutdown: tx,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

#[tokio::test]
async fn serves_all_routes_over_http() {
    let server = TestServer::start(AppState::default()).await;
    let http = reqwest::Client::new();

    let cases = [
        ("/hello", json!({ "message": "Hello BHVR!", "success": true })),
        ("/api/hello", json!({ "message": "Hello, World!" })),
        ("/version", json!({ "version": "0.0.0", "name": "server" })),
        ("/health", json!({ "status": "ok" })),
        ("/test", json!({ "test": "ok" })),
    ];

    for (path, expected) in cases {
        let response = http.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK, "{path}");
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.contains("application/json"), "{path}: {content_type}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, expected, "{path}");
    }

    let root = http.get(server.url("/")).send().await.unwrap();
    assert_eq!(root.status(), reqwest::StatusCode::OK);
    assert_eq!(root.text().await.unwrap(), "Hello Hono!");
}

#[tokio::test]
async fn version_reflects_configured_bindings() {
    let config = Config::from_pairs([("APP_VERSION", "3.1.4"), ("APP_NAME", "bhvr-api")]).unwrap();
    let server = TestServer::start(AppState::new(config.version_info())).await;

    let body: VersionResponse = reqwest::get(server.url("/version"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        VersionResponse {
            version: "3.1.4".to_string(),
            name: "bhvr-api".to_string(),
        }
    );
}

#[tokio::test]
async fn test_route_is_stable_under_concurrency() {
    let server = TestServer::start(AppState::default()).await;
    let http = reqwest::Client::new();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let http = http.clone();
        let url = server.url("/test");
        handles.push(tokio::spawn(async move {
            let response = http.get(url).send().await.unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::OK);
            response.bytes().await.unwrap()
        }));
    }

    let mut bodies = Vec::new();
    for handle in handles {
        bodies.push(handle.await.unwrap());
    }

    let first = &bodies[0];
    assert!(bodies.iter().all(|b| b == first));
    let parsed: TestResponse = serde_json::from_slice(first).unwrap();
    assert_eq!(parsed, TestResponse::ok());
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let server = TestServer::start(AppState::default()).await;
    let http = reqwest::Client::new();

    for method in [reqwest::Method::POST, reqwest::Method::PUT, reqwest::Method::DELETE] {
        let status = http
            .request(method.clone(), server.url("/test"))
            .send()
            .await
            .unwrap()
            .status();
        assert!(
            status == reqwest::StatusCode::NOT_FOUND
                || status == reqwest::StatusCode::METHOD_NOT_ALLOWED,
            "{method} /test returned {status}"
        );
    }
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let server = TestServer::start(AppState::default()).await;

    let response = reqwest::Client::new()
        .get(server.url("/test"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn client_renders_greeting() {
    let server = TestServer::start(AppState::default()).await;
    let client = HelloClient::new(&server.url("")).unwrap();

    assert_eq!(client.fetch_hello().await.unwrap(), GreetingResponse::hello());

    let mut view = HelloView::new();
    assert!(view.refresh(&client).await);
    assert_eq!(view.render(), "Message: Hello BHVR!\nSuccess: true");
}

#[tokio::test]
async fn client_keeps_previous_display_on_error_status() {
    let server = TestServer::start(AppState::default()).await;
    let good = HelloClient::new(&server.url("")).unwrap();
    // `/missing/hello` is not a route, so this client always gets a 404.
    let bad = HelloClient::new(&server.url("/missing")).unwrap();

    match bad.fetch_hello().await {
        Err(ClientError::Status(status)) => assert_eq!(status, reqwest::StatusCode::NOT_FOUND),
        other => panic!("expected 404 status error, got {other:?}"),
    }

    let mut view = HelloView::new();
    assert!(view.refresh(&good).await);
    let before = view.clone();

    assert!(!view.refresh(&bad).await);
    assert_eq!(view, before);
    assert_eq!(view.data(), Some(&GreetingResponse::hello()));
}
