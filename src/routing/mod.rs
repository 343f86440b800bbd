//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path-and-query
//!     → prefix.rs (literal starts_with check against the reserved prefix)
//!     → Some(suffix): forward suffix to the upstream fetcher
//!     → None: hand the untouched request to the static file service
//! ```
//!
//! # Design Decisions
//! - The prefix check is a literal string comparison on the start of the
//!   path, not a path-segment match: `/api_proxyfoo` is proxied with
//!   suffix `foo`
//! - The prefix is stripped exactly once; no other rewriting happens
//! - Deterministic: same input always dispatches the same way

pub mod prefix;

pub use prefix::PrefixRoute;
