//! Routing-Table Exposure Service
//!
//! Serves the server-side URL routing table to client code (typically
//! browser JavaScript) so clients can generate URLs without duplicating
//! routing rules.

pub mod config;
pub mod error;
pub mod http;
pub mod routing;

pub use config::schema::AppConfig;
pub use error::EndpointError;
pub use http::HttpServer;
