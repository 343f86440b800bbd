//! Mapping fetch outcomes to wire responses.
//!
//! # Design Decisions
//! - Each `FetchOutcome` variant maps to exactly one response shape; the
//!   dispatch handler has no say in it
//! - The CORS header is added on the success path only. The original
//!   server omitted it on error passthroughs, which means a browser page
//!   cannot read upstream error bodies; that quirk is kept for parity
//! - Local failures carry `{"error": "<message>"}` so the front end can
//!   show something actionable

use axum::body::Body;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;

use crate::upstream::FetchOutcome;

/// Build the client-facing response for one fetch outcome.
pub fn outcome_response(outcome: FetchOutcome) -> Response {
    match outcome {
        FetchOutcome::Success {
            status,
            content_type,
            body,
        } => {
            let mut response = Response::new(Body::from(body));
            *response.status_mut() = status;
            if let Some(content_type) = content_type {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            response
                .headers_mut()
                .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
            response
        }

        FetchOutcome::UpstreamError { status, body } => {
            let mut response = Response::new(Body::from(body));
            *response.status_mut() = status;
            response
        }

        FetchOutcome::LocalFailure { message } => {
            let body = serde_json::json!({ "error": message }).to_string();
            let mut response = Response::new(Body::from(body));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        }
    }
}
