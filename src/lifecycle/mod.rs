//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Ctrl-C (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → HttpServer::run finishes its graceful shutdown
//!     → process exits cleanly
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
