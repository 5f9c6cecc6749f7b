//! Response payload assembly and serialization seam.
//!
//! # Design Decisions
//! - Every payload field is always present, even when empty, so the
//!   serialized shape is stable across groups and locales
//! - Serialization sits behind a trait so the endpoint does not care about
//!   the wire format

use crate::error::EndpointError;
use crate::routing::context::RequestContext;
use crate::routing::exposure::ExposedRoutes;
use serde::Serialize;

/// The serialization unit handed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct RoutesResponse {
    pub base_url: String,
    pub routes: ExposedRoutes,
    pub prefix: String,
    pub host: String,
    pub scheme: String,
    pub locale: String,
}

impl RoutesResponse {
    pub fn new(context: RequestContext, routes: ExposedRoutes, locale: String) -> Self {
        Self {
            base_url: context.base_url,
            routes,
            prefix: context.prefix,
            host: context.host,
            scheme: context.scheme,
            locale,
        }
    }
}

/// Payload serializer capability.
pub trait Serializer: Send + Sync {
    fn serialize(&self, payload: &RoutesResponse) -> Result<String, EndpointError>;
}

/// JSON serializer, the shipped format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, payload: &RoutesResponse) -> Result<String, EndpointError> {
        Ok(serde_json::to_string(payload)?)
    }
}
