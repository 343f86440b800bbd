//! Upstream API access.
//!
//! # Data Flow
//! ```text
//! stripped suffix
//!     → client.rs (verbatim concatenation onto the base URL, outbound GET)
//!     → outcome.rs (three-way classification of what came back)
//!     → http/response.rs maps each variant to a wire response
//! ```
//!
//! # Design Decisions
//! - The fetch function never fails: every result, including transport
//!   errors, is folded into a `FetchOutcome` variant so the handler has no
//!   error branch of its own
//! - Bodies are fully buffered; nothing is streamed
//! - No retries, no circuit breaking

pub mod client;
pub mod outcome;

pub use client::UpstreamClient;
pub use outcome::FetchOutcome;
