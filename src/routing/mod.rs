//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route table (at startup):
//!     RouteDefinition[]
//!     → table.rs (freeze as registration-ordered RouteTable)
//!
//! Per request:
//!     RouteTable + ExposureConfig + group
//!     → exposure.rs (select exposed subset, table order preserved)
//!     RouterContext + locale
//!     → context.rs (scheme/host/port suffix/base path/locale prefix)
//! ```
//!
//! # Design Decisions
//! - Route table compiled at startup, immutable at runtime
//! - Exposure is opt-in: routes without a config entry are never exposed
//! - Table registration order flows unchanged into the serialized payload
//! - Resolvers are pure functions of explicit inputs, no ambient state

pub mod context;
pub mod exposure;
pub mod table;

pub use context::{resolve_context, BaseUrlPolicy, LocalePrefix, RequestContext};
pub use exposure::{exposed_routes, ExposedRoutes};
pub use table::{Route, RouteTable, RouterContext};
