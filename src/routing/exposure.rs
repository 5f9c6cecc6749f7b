//! Route exposure policy.
//!
//! # Responsibilities
//! - Select the subset of the route table exposed to a given group
//!
//! # Design Decisions
//! - Opt-in model: routes without a `routes_to_expose` entry are excluded
//! - Malformed entries are tolerated and mean "not exposed"
//! - Pure function over its inputs; a fresh set is built per request
//! - Table order is preserved so the serialized payload is stable

use crate::config::exposure::ExposureConfig;
use crate::routing::table::{Route, RouteTable};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The exposed subset of the route table for one request.
///
/// Serializes as a JSON object whose key order equals the table's
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct ExposedRoutes {
    entries: Vec<(String, Route)>,
}

impl ExposedRoutes {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.entries.iter().map(|(name, route)| (name.as_str(), route))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ExposedRoutes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, route) in &self.entries {
            map.serialize_entry(name, route)?;
        }
        map.end()
    }
}

/// Select the routes exposed to `group`.
///
/// A route is included iff its `routes_to_expose` entry is `true`, or is a
/// group list containing `group`.
pub fn exposed_routes(table: &RouteTable, config: &ExposureConfig, group: &str) -> ExposedRoutes {
    let entries = table
        .iter()
        .filter(|(name, _)| {
            config
                .routes_to_expose
                .get(*name)
                .is_some_and(|rule| rule.exposes_to(group))
        })
        .map(|(name, route)| (name.to_string(), route.clone()))
        .collect();

    ExposedRoutes { entries }
}
