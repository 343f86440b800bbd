//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, dispatch handler)
//!     → routing decides: proxy prefix or static file
//!     → response.rs (map fetch outcome to wire response)
//!     → send to client
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
