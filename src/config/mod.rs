//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! startup config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc to the HTTP server
//!
//! exposure config file (TOML, separate path):
//!     re-read on every request through ExposureSource
//!     → exposure.rs (routes_to_expose + cache mappings)
//!     → consumed by the exposure policy and the cache resolver
//! ```
//!
//! # Design Decisions
//! - Startup config is immutable once loaded; changes require restart
//! - All fields have defaults to allow minimal configs
//! - Exposure config is deliberately NOT loaded at startup: it is read per
//!   request so operators can change exposure without a restart
//! - Validation separates syntactic (serde) from semantic checks

pub mod exposure;
pub mod loader;
pub mod schema;
pub mod validation;

pub use exposure::{ExposureConfig, ExposureSource, FileExposureSource, StaticExposureSource};
pub use schema::AppConfig;
pub use schema::ContextConfig;
pub use schema::ListenerConfig;
pub use schema::RouteDefinition;
