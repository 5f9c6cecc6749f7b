//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! GET /routes[/{group}]?callback=&_locale=
//!     → handler.rs (orchestration)
//!         → exposure config load (once per request)
//!         → routing::exposure (exposed subset)
//!         → routing::context (scheme/host/base path/prefix)
//!         → payload.rs (RoutesResponse → serializer)
//!         → jsonp.rs (optional callback wrapping, 400 on bad token)
//!         → cache.rs (per-group Cache-Control header)
//!     → 200 application/javascript, or 400/500 from error.rs
//! ```
//!
//! # Design Decisions
//! - Single read endpoint; linear orchestration with fail-fast validation
//! - Synchronous, idempotent read path; no retries at this layer
//! - Cache directives attach only when the group has a configured policy

pub mod cache;
pub mod handler;
pub mod jsonp;
pub mod payload;
pub mod server;

pub use cache::{resolve_cache, CachePolicy};
pub use payload::{JsonSerializer, RoutesResponse, Serializer};
pub use server::{AppState, HttpServer};
