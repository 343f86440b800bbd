//! Local development proxy for the FF14 Point Farmer front end.
//!
//! Serves the front end's static files from a directory and forwards any
//! request under a reserved path prefix to the XIVAPI HTTP API, relaying the
//! upstream response back with a permissive CORS header so a browser page
//! served from this origin can read it.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                  DEV PROXY                    │
//!                    │                                               │
//!   Client Request   │  ┌──────────┐        ┌────────────────┐      │
//!   ─────────────────┼─▶│   http   │───────▶│    routing     │      │
//!                    │  │  server  │        │  prefix match  │      │
//!                    │  └──────────┘        └───────┬────────┘      │
//!                    │                              │               │
//!                    │               prefix hit     │   no match    │
//!                    │             ┌────────────────┴──────────┐    │
//!                    │             ▼                           ▼    │
//!                    │      ┌────────────┐            ┌─────────────┐
//!                    │      │  upstream  │            │static_files │
//!                    │      │   fetch    │            │  (ServeDir) │
//!                    │      └─────┬──────┘            └──────┬──────┘
//!                    │            │                          │      │
//!   Client Response  │  ┌─────────▼─────────┐                │      │
//!   ◀────────────────┼──│ outcome → wire    │◀───────────────┘      │
//!                    │  │ response mapping  │                       │
//!                    │  └───────────────────┘                       │
//!                    │                                               │
//!                    │  Cross-cutting: config, lifecycle,            │
//!                    │  observability                                │
//!                    └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod static_files;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
