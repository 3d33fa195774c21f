//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create Axum Router with landing and relay routes
//! - Wire up middleware (tracing, panic boundary)
//! - Bind server to listener with graceful shutdown
//! - Forward requests to the target embedded in the path

use std::any::Any;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::http::client::UpstreamClient;
use crate::http::error::{RelayError, FALLBACK_MESSAGE};
use crate::http::landing::landing_page;
use crate::http::request::{is_landing_path, RelayTarget};
use crate::http::response::relay_response;
use crate::lifecycle::ShutdownSignal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: UpstreamClient,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let client = UpstreamClient::new(&config.client)?;
        let router = build_router(AppState { client });
        Ok(Self { router, config })
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_redirects = self.config.client.max_redirects,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Consume the server and return its router.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/{*target}", any(relay_handler))
        .route("/", any(relay_handler))
        .with_state(state);

    with_middleware(router)
}

/// Wrap a router with tracing and the panic boundary.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

/// Relay handler.
/// Serves the landing page, or extracts the target from the path, forwards,
/// and rewrites the response.
async fn relay_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, RelayError> {
    if is_landing_path(request.uri().path()) {
        return Ok(landing_page().await.into_response());
    }

    let target = RelayTarget::from_uri(request.uri()).inspect_err(|e| {
        tracing::warn!(uri = %request.uri(), error = %e, "Rejected relay target");
    })?;

    let (parts, body) = request.into_parts();
    tracing::debug!(method = %parts.method, target = %target, "Relaying request");

    let target_url = target.to_string();
    let upstream = state
        .client
        .forward(parts.method, target, parts.headers, body)
        .await
        .inspect_err(|e| {
            tracing::error!(target = %target_url, error = %e.message(), "Upstream request failed");
        })?;

    tracing::debug!(target = %target_url, status = %upstream.status(), "Upstream responded");
    Ok(relay_response(upstream))
}

/// Last-resort boundary: a panicking handler still yields a well-formed 500.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_MESSAGE).into_response()
}
