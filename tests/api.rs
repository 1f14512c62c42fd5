//! End-to-end HTTP tests against the real router over an in-memory store.
#![allow(clippy::panic, missing_docs)]

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use summary_api::app::build_app;
use summary_api::app_state::AppState;
use summary_api::persistence::{MemorySummaryStore, SummaryStore};

struct TestServer {
    addr: SocketAddr,
    client: Client,
    store: Arc<MemorySummaryStore>,
}

impl TestServer {
    async fn start() -> Self {
        let store = Arc::new(MemorySummaryStore::new());
        let shared: Arc<dyn SummaryStore> = Arc::<MemorySummaryStore>::clone(&store);
        let state = AppState::new(shared, "test", true);

        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("failed to bind test listener");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("listener has no local address");
        };
        tokio::spawn(async move {
            let _ = axum::serve(listener, build_app(state)).await;
        });

        Self {
            addr,
            client: Client::new(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> (StatusCode, Value) {
        let Ok(response) = request.send().await else {
            panic!("request failed");
        };
        let status = response.status();
        let Ok(body) = response.json::<Value>().await else {
            panic!("response body is not json");
        };
        (status, body)
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(self.client.post(self.url(path)).json(&body)).await
    }

    async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(self.client.put(self.url(path)).json(&body)).await
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send(self.client.get(self.url(path))).await
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.send(self.client.delete(self.url(path))).await
    }

    async fn create(&self, url: &str) -> i64 {
        let (status, body) = self.post("/summaries/", json!({ "url": url })).await;
        assert_eq!(status, StatusCode::CREATED);
        let Some(id) = body["id"].as_i64() else {
            panic!("create response has no id: {body}");
        };
        id
    }
}

#[tokio::test]
async fn ping_reports_environment() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ping": "pong!", "environment": "test", "testing": true }));
}

#[tokio::test]
async fn create_summary_returns_id_and_url() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post("/summaries/", json!({ "url": "https://foo.bar" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().is_some_and(|id| id > 0));
    assert_eq!(body["url"], "https://foo.bar/");
}

#[tokio::test]
async fn create_rejects_invalid_url_without_storing() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post("/summaries/", json!({ "url": "not-a-url" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], 1001);
    assert!(body["error"]["details"]
        .as_str()
        .is_some_and(|d| d.contains("url")));

    let (status, _) = server.post("/summaries/", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = server
        .post("/summaries/", json!({ "url": "invalid://url" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert!(server.store.is_empty().await);
}

#[tokio::test]
async fn read_created_summary_has_empty_summary() {
    let server = TestServer::start().await;
    let id = server.create("https://foo.bar").await;

    let (status, body) = server.get(&format!("/summaries/{id}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["url"], "https://foo.bar/");
    assert_eq!(body["summary"], "");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn read_missing_summary_is_not_found() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/summaries/999999/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Summary not found");
}

#[tokio::test]
async fn non_positive_or_malformed_ids_are_rejected() {
    let server = TestServer::start().await;

    for path in ["/summaries/0/", "/summaries/-1/", "/summaries/abc/"] {
        let (status, body) = server.get(path).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "GET {path}");
        assert_eq!(body["error"]["code"], 1002);

        let (status, _) = server.delete(path).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "DELETE {path}");

        let (status, _) = server
            .put(path, json!({ "url": "https://foo.bar", "summary": "updated!" }))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "PUT {path}");
    }
}

#[tokio::test]
async fn read_all_returns_every_record_in_order() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/summaries/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let urls = ["https://a.example/", "https://b.example/", "https://c.example/"];
    let mut ids = Vec::new();
    for url in urls {
        ids.push(server.create(url).await);
    }

    let (status, body) = server.get("/summaries/").await;
    assert_eq!(status, StatusCode::OK);
    let Some(items) = body.as_array() else {
        panic!("list response is not an array");
    };
    assert_eq!(items.len(), urls.len());
    for ((item, id), url) in items.iter().zip(&ids).zip(urls) {
        assert_eq!(item["id"], *id);
        assert_eq!(item["url"], url);
        assert_eq!(item["summary"], "");
    }
}

#[tokio::test]
async fn update_replaces_url_and_summary() {
    let server = TestServer::start().await;
    let id = server.create("https://foo.bar").await;
    let (_, before) = server.get(&format!("/summaries/{id}/")).await;

    let (status, body) = server
        .put(
            &format!("/summaries/{id}/"),
            json!({ "url": "https://foo.bar/updated", "summary": "updated!" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["url"], "https://foo.bar/updated");
    assert_eq!(body["summary"], "updated!");

    let (status, after) = server.get(&format!("/summaries/{id}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["url"], "https://foo.bar/updated");
    assert_eq!(after["summary"], "updated!");
    assert_eq!(after["created_at"], before["created_at"]);
}

#[tokio::test]
async fn update_missing_summary_is_not_found_and_changes_nothing() {
    let server = TestServer::start().await;
    let id = server.create("https://foo.bar").await;

    let (status, _) = server
        .put(
            "/summaries/999999/",
            json!({ "url": "https://foo.bar", "summary": "updated!" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = server.get(&format!("/summaries/{id}/")).await;
    assert_eq!(body["summary"], "");
    assert_eq!(server.store.len().await, 1);
}

#[tokio::test]
async fn update_rejects_invalid_payloads() {
    let server = TestServer::start().await;
    let id = server.create("https://foo.bar").await;
    let path = format!("/summaries/{id}/");

    for payload in [
        json!({}),
        json!({ "url": "https://foo.bar" }),
        json!({ "summary": "updated!" }),
        json!({ "url": "invalid://url", "summary": "updated!" }),
    ] {
        let (status, body) = server.put(&path, payload.clone()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "payload {payload}");
        assert_eq!(body["error"]["code"], 1001);
    }

    let (_, body) = server.get(&path).await;
    assert_eq!(body["url"], "https://foo.bar/");
    assert_eq!(body["summary"], "");
}

#[tokio::test]
async fn delete_returns_record_and_removes_it() {
    let server = TestServer::start().await;
    let id = server.create("https://foo.bar").await;
    let _ = server
        .put(
            &format!("/summaries/{id}/"),
            json!({ "url": "https://foo.bar", "summary": "keep me" }),
        )
        .await;

    let (status, body) = server.delete(&format!("/summaries/{id}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["url"], "https://foo.bar/");
    assert_eq!(body["summary"], "keep me");
    assert!(body["created_at"].is_string());

    let (status, _) = server.get(&format!("/summaries/{id}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.delete(&format!("/summaries/{id}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unslashed_paths_get_json_not_found() {
    let server = TestServer::start().await;
    let id = server.create("https://foo.bar").await;

    let (status, body) = server
        .post("/summaries", json!({ "url": "https://foo.bar" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2002);
    assert_eq!(body["error"]["details"], "POST /summaries");

    let (status, body) = server.get(&format!("/summaries/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "route not found");

    assert_eq!(server.store.len().await, 1);
}
