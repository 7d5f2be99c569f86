//! Shared utilities for integration testing.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use tron_admin_client::client::{HttpTransport, ResilientClient, Target, TargetKind};
use tron_admin_client::config::OperatingMode;
use tron_admin_client::session::{MemoryStorage, RecordingRedirect, Session, TokenStorage};
use tron_admin_client::AdminApi;

/// What a mock backend saw.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
    pub body: String,
}

/// How a mock backend answers.
#[allow(dead_code)]
pub enum Reply {
    Json(u16, Value),
    Slow(Duration, u16, Value),
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> Reply + Send + Sync>;

#[derive(Clone)]
struct BackendState {
    responder: Responder,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A running programmable backend.
pub struct MockBackend {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

/// Start a backend on an ephemeral port answering through `responder`.
pub async fn start_backend<F>(responder: F) -> MockBackend
where
    F: Fn(&RecordedRequest) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let state = BackendState {
        responder: Arc::new(responder),
        seen: seen.clone(),
    };
    let app = Router::new().fallback(handle).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockBackend { addr, seen }
}

/// Backend that always answers `status` with `body`.
#[allow(dead_code)]
pub async fn start_fixed_backend(status: u16, body: Value) -> MockBackend {
    start_backend(move |_| Reply::Json(status, body.clone())).await
}

/// Base URL nothing listens on.
#[allow(dead_code)]
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

async fn handle(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };

    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        authorization: header("authorization"),
        request_id: header("x-request-id"),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    state.seen.lock().unwrap().push(recorded.clone());

    let (delay, status, body) = match (state.responder)(&recorded) {
        Reply::Json(status, body) => (None, status, body),
        Reply::Slow(delay, status, body) => (Some(delay), status, body),
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body)).into_response()
}

/// A client over real HTTP plus the hooks tests assert on.
#[allow(dead_code)]
pub struct TestClient {
    pub api: AdminApi,
    pub redirect: Arc<RecordingRedirect>,
}

/// Build a client over `(kind, base_url, timeout_ms)` targets in order.
#[allow(dead_code)]
pub fn client(targets: &[(TargetKind, String, u64)], mode: OperatingMode) -> TestClient {
    client_with_storage(targets, mode, Arc::new(MemoryStorage::new()))
}

#[allow(dead_code)]
pub fn client_with_storage(
    targets: &[(TargetKind, String, u64)],
    mode: OperatingMode,
    storage: Arc<dyn TokenStorage>,
) -> TestClient {
    let targets = targets
        .iter()
        .map(|(kind, url, ms)| Target::new(*kind, url, Duration::from_millis(*ms)).unwrap())
        .collect();

    let http = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    let redirect = Arc::new(RecordingRedirect::new());
    let session = Arc::new(Session::new(storage, mode, redirect.clone()));
    let client = ResilientClient::new(targets, Arc::new(HttpTransport::with_client(http)), session);

    TestClient {
        api: AdminApi::new(client),
        redirect,
    }
}
