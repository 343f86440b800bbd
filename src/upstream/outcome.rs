//! Outcome classification for upstream fetches.

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode};

/// The three things that can come out of a proxy fetch.
///
/// The handler maps each variant to a wire response deterministically;
/// there is no other control flow on the proxy path.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Upstream answered with a non-error status. Relayed with the
    /// upstream Content-Type (if any) and a permissive CORS header.
    Success {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: Bytes,
    },

    /// Upstream answered with an error status (>= 400). Status and body
    /// are relayed byte for byte with no headers added.
    UpstreamError { status: StatusCode, body: Bytes },

    /// The request never produced an upstream response: DNS failure,
    /// connection refused, timeout, malformed target URL, or a failed
    /// body read. Becomes a 500 with a JSON error body.
    LocalFailure { message: String },
}
