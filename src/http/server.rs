//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router and wire up middleware
//! - Dispatch each request: reserved prefix → proxy, anything else → static
//! - Bind the server to a listener and run it until shutdown
//!
//! # Design Decisions
//! - One catch-all handler does the dispatch so the prefix check is a
//!   literal `starts_with` on the path, matching the original semantics
//!   rather than Axum's segment-based routing
//! - All state is immutable and shared via `Arc`; requests are fully
//!   independent of each other

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::http::response::outcome_response;
use crate::routing::PrefixRoute;
use crate::static_files::StaticFiles;
use crate::upstream::UpstreamClient;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub route: Arc<PrefixRoute>,
    pub upstream: Arc<UpstreamClient>,
    pub static_files: StaticFiles,
}

/// HTTP server for the development proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let state = AppState {
            route: Arc::new(PrefixRoute::new(config.route.prefix)),
            upstream: Arc::new(UpstreamClient::new(&config.upstream)?),
            static_files: StaticFiles::new(&config.static_files.root),
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(dispatch))
            .route("/{*path}", get(dispatch))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server on the given listener until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Dispatch one request: proxy when the reserved prefix matches, static
/// file serving otherwise.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    // The suffix keeps the query string; nothing past the prefix changes.
    let suffix = state.route.strip(path_and_query).map(str::to_owned);

    match suffix {
        Some(suffix) => {
            let outcome = state.upstream.fetch(&suffix).await;
            outcome_response(outcome)
        }
        None => state.static_files.serve(request).await,
    }
}
