//! Observability.
//!
//! Structured logging via the `tracing` crate; per-request HTTP traces come
//! from tower-http's `TraceLayer` in the server setup.

pub mod logging;
