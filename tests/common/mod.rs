//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Redirect},
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;

use cors_relay::config::{ClientConfig, RelayConfig};
use cors_relay::{HttpServer, Shutdown};

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
}

/// Shared state of the mock backend.
#[derive(Clone, Default)]
pub struct Backend {
    pub hits: Arc<AtomicUsize>,
    pub seen: Arc<Mutex<Vec<Recorded>>>,
}

impl Backend {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Recorded {
        self.seen.lock().unwrap().last().cloned().expect("backend saw no request")
    }
}

async fn record(State(backend): State<Backend>, method: Method, uri: Uri, headers: HeaderMap) -> Recorded {
    let recorded = Recorded { method, uri, headers };
    backend.seen.lock().unwrap().push(recorded.clone());
    recorded
}

async fn data(state: State<Backend>, method: Method, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    record(state, method, uri, headers).await;
    ([(header::CONTENT_TYPE, "application/json")], r#"{"ok":true}"#)
}

async fn counter(State(backend): State<Backend>) -> String {
    let count = backend.hits.fetch_add(1, Ordering::SeqCst) + 1;
    count.to_string()
}

async fn vary() -> impl IntoResponse {
    (
        [
            (header::VARY, "Accept-Encoding"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://only.example.org"),
        ],
        "varied",
    )
}

async fn echo(state: State<Backend>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    record(state, method.clone(), uri, headers).await;
    (StatusCode::CREATED, [("x-echo-method", method.to_string())], body)
}

async fn teapot() -> impl IntoResponse {
    (StatusCode::IM_A_TEAPOT, "short and stout")
}

/// Start a mock backend on an ephemeral port.
pub async fn start_mock_backend() -> (SocketAddr, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/data", get(data))
        .route("/counter", get(counter))
        .route("/vary", get(vary))
        .route("/echo", any(echo))
        .route("/teapot", get(teapot))
        .route("/moved", get(|| async { Redirect::temporary("/data?from=redirect") }))
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, backend)
}

/// Start the relay on an ephemeral port. Keep the `Shutdown` alive for the test.
pub async fn start_relay() -> (SocketAddr, Shutdown) {
    let mut config = RelayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.client = ClientConfig {
        use_system_proxy: false,
        ..ClientConfig::default()
    };

    let listener = cors_relay::net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });
    (addr, shutdown)
}

/// Test client that talks to the relay directly.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// An address nothing listens on.
#[allow(dead_code)]
pub fn dead_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}
