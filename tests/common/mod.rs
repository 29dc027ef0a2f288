use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use lostfound::claims::StaticClaims;
use lostfound::config::Config;
use lostfound::models::{LostItemReport, NewLostItem};
use lostfound::store::{ReportStore, SharedReportStore, StoreError};

/// In-memory `ReportStore` double. Keeps insertion order so the
/// newest-first tie-break behaves like the real store.
pub struct MemoryStore {
    items: Mutex<Vec<LostItemReport>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn insert(&self, item: &NewLostItem) -> Result<LostItemReport, StoreError> {
        let report = LostItemReport {
            id: Uuid::now_v7(),
            name: item.name.clone(),
            description: item.description.clone(),
            location: item.location.clone(),
            reported_at: Utc::now(),
            extras: item.extras.clone(),
        };
        self.items.lock().await.push(report.clone());
        Ok(report)
    }

    async fn list_newest_first(&self) -> Result<Vec<LostItemReport>, StoreError> {
        let mut items = self.items.lock().await.clone();
        // Stable sort over the reversed list: equal timestamps keep
        // later-insert-first order.
        items.reverse();
        items.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
        Ok(items)
    }
}

/// A store whose backend is gone. Every call fails.
pub struct FailingStore;

#[async_trait]
impl ReportStore for FailingStore {
    async fn insert(&self, _item: &NewLostItem) -> Result<LostItemReport, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_newest_first(&self) -> Result<Vec<LostItemReport>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET /api/lost_items, return (body, status).
    pub async fn list_items(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api/lost_items"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        (body, status)
    }

    /// POST a report to /api/lost_items, return (body, status).
    pub async fn submit_item(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/lost_items"))
            .json(body)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        (body, status)
    }

    /// GET /api/claims, return (body, status).
    pub async fn list_claims(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api/claims"))
            .send()
            .await
            .expect("claims request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        (body, status)
    }
}

fn test_config() -> Config {
    Config {
        // Never dialed: tests inject a store instead of a pool.
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        static_dir: "frontend".to_string(),
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app backed by a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(MemoryStore::new())).await
}

/// Spawn a test app around an arbitrary store double.
pub async fn spawn_app_with_store(store: SharedReportStore) -> TestApp {
    let app = lostfound::build_app(store, Arc::new(StaticClaims), test_config());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}
