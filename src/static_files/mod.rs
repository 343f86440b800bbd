//! Static file serving.
//!
//! # Design Decisions
//! - Composition over inheritance: the dispatcher holds this service and
//!   calls it through the tower `Service` interface, so tests can exercise
//!   the proxy path without touching the filesystem and vice versa
//! - The heavy lifting (MIME inference, directory index files, 404s,
//!   range requests) belongs to tower-http's `ServeDir`

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Serves files from a root directory for every non-proxied request.
#[derive(Clone)]
pub struct StaticFiles {
    inner: ServeDir,
}

impl StaticFiles {
    /// Create a service rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            inner: ServeDir::new(root),
        }
    }

    /// Serve one request.
    pub async fn serve(&self, request: Request<Body>) -> Response {
        match self.inner.clone().oneshot(request).await {
            Ok(response) => response.map(Body::new),
            Err(infallible) => match infallible {},
        }
    }
}
