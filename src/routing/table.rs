//! Route table storage and the router context.
//!
//! # Responsibilities
//! - Hold the route table in registration order
//! - Assemble the per-request router context (scheme, host, ports, base URL)
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Vec-backed: iteration order is registration order, always
//! - Scheme and host follow the incoming request; ports and base URL have no
//!   per-request source and come from configuration

use crate::config::schema::{ContextConfig, RouteDefinition};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single route as seen by this service.
///
/// Only `path` and `methods` are serialized, so the payload shape stays
/// stable regardless of declared options.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Route {
    /// Path pattern (e.g., "/blog/{slug}").
    pub path: String,

    /// Allowed HTTP methods.
    pub methods: Vec<String>,

    /// Opaque declared options. A legacy `expose` boolean may appear here;
    /// it is not consulted by the exposure policy.
    #[serde(skip_serializing)]
    pub options: BTreeMap<String, toml::Value>,
}

/// The full route table, in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<(String, Route)>,
}

impl RouteTable {
    /// Build the table from configuration, preserving entry order.
    pub fn from_config(definitions: &[RouteDefinition]) -> Self {
        let entries = definitions
            .iter()
            .map(|def| {
                (
                    def.name.clone(),
                    Route {
                        path: def.path.clone(),
                        methods: def.methods.clone(),
                        options: def.options.clone(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Iterate `(id, route)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.entries.iter().map(|(name, route)| (name.as_str(), route))
    }

    /// Look up a route by identifier.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, route)| route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The router's view of the current request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterContext {
    /// Active scheme, "http" or "https".
    pub scheme: String,

    /// Host without any port suffix.
    pub host: String,

    /// Configured http port.
    pub http_port: u16,

    /// Configured https port.
    pub https_port: u16,

    /// Configured base URL path prefix.
    pub base_url: String,
}

impl RouterContext {
    /// Assemble the context for one request. `scheme` and `host` are the
    /// request-derived values when present, falling back to configuration.
    pub fn for_request(
        config: &ContextConfig,
        request_scheme: Option<&str>,
        request_host: Option<&str>,
    ) -> Self {
        let scheme = request_scheme.unwrap_or(&config.scheme).to_string();
        let host = request_host
            .map(strip_port)
            .unwrap_or_else(|| config.host.clone());

        Self {
            scheme,
            host,
            http_port: config.http_port,
            https_port: config.https_port,
            base_url: config.base_url.clone(),
        }
    }
}

/// Drop a trailing `:port` from a Host header value. Bracketed and bare
/// IPv6 literals are left intact unless the port is outside the brackets.
fn strip_port(host: &str) -> String {
    if let Some(rest) = host.strip_prefix('[') {
        if let Some((addr, _)) = rest.split_once(']') {
            return format!("[{}]", addr);
        }
    }
    match host.rsplit_once(':') {
        Some((name, port))
            if !name.is_empty()
                && !name.contains(':')
                && port.chars().all(|c| c.is_ascii_digit()) =>
        {
            name.to_string()
        }
        _ => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str, path: &str) -> RouteDefinition {
        RouteDefinition {
            name: name.to_string(),
            path: path.to_string(),
            methods: vec!["GET".to_string()],
            options: BTreeMap::new(),
        }
    }

    #[test]
    fn table_preserves_registration_order() {
        let table = RouteTable::from_config(&[
            definition("zebra", "/z"),
            definition("apple", "/a"),
            definition("mango", "/m"),
        ]);

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
        assert_eq!(table.get("apple").unwrap().path, "/a");
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn request_values_override_config() {
        let config = ContextConfig::default();
        let ctx = RouterContext::for_request(&config, Some("https"), Some("example.com:8443"));
        assert_eq!(ctx.scheme, "https");
        assert_eq!(ctx.host, "example.com");

        let ctx = RouterContext::for_request(&config, None, None);
        assert_eq!(ctx.scheme, "http");
        assert_eq!(ctx.host, "localhost");
    }

    #[test]
    fn strip_port_handles_ipv6() {
        assert_eq!(strip_port("example.com:8080"), "example.com");
        assert_eq!(strip_port("example.com"), "example.com");
        assert_eq!(strip_port("[::1]:8080"), "[::1]");
        assert_eq!(strip_port("::1"), "::1");
    }

    #[test]
    fn route_serializes_without_options() {
        let mut options = BTreeMap::new();
        options.insert("expose".to_string(), toml::Value::Boolean(true));
        let route = Route {
            path: "/blog/{slug}".to_string(),
            methods: vec!["GET".to_string()],
            options,
        };

        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "path": "/blog/{slug}", "methods": ["GET"] })
        );
    }
}
