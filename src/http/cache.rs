//! Per-group cache policy resolution.
//!
//! # Responsibilities
//! - Resolve the cache descriptor for a group from the exposure config
//! - Render a resolved policy into a `Cache-Control` header value
//!
//! # Design Decisions
//! - A missing group entry is the normal "no policy" case, not an error
//! - A `cache` section that is present but not a table is an operator
//!   mistake and is surfaced, never silently defaulted

use crate::config::exposure::ExposureConfig;
use crate::error::EndpointError;
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// Cache directives for one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CachePolicy {
    /// `max-age` in seconds.
    pub max_age: Option<u64>,

    /// `s-maxage` in seconds, for shared caches.
    pub s_maxage: Option<u64>,

    pub public: Option<bool>,
    pub private: Option<bool>,
    pub must_revalidate: Option<bool>,
}

impl CachePolicy {
    /// Render as a `Cache-Control` header value, or `None` when the policy
    /// carries no directives.
    pub fn header_value(&self) -> Option<HeaderValue> {
        let mut directives = Vec::new();

        if self.public == Some(true) {
            directives.push("public".to_string());
        }
        if self.private == Some(true) {
            directives.push("private".to_string());
        }
        if let Some(secs) = self.max_age {
            directives.push(format!("max-age={}", secs));
        }
        if let Some(secs) = self.s_maxage {
            directives.push(format!("s-maxage={}", secs));
        }
        if self.must_revalidate == Some(true) {
            directives.push("must-revalidate".to_string());
        }

        if directives.is_empty() {
            return None;
        }
        HeaderValue::from_str(&directives.join(", ")).ok()
    }
}

/// Resolve the cache policy for `group`.
///
/// Returns `Ok(None)` when there is no group, no `cache` section, or no
/// entry for the group. Returns `ConfigMalformed` when the section or the
/// group's descriptor has the wrong shape.
pub fn resolve_cache(
    config: &ExposureConfig,
    group: Option<&str>,
) -> Result<Option<CachePolicy>, EndpointError> {
    let Some(group) = group else {
        return Ok(None);
    };

    let Some(cache) = &config.cache else {
        return Ok(None);
    };

    let table = cache.as_table().ok_or_else(|| {
        EndpointError::ConfigMalformed("`cache` must be a table of group entries".to_string())
    })?;

    let Some(descriptor) = table.get(group) else {
        return Ok(None);
    };

    let policy = descriptor.clone().try_into().map_err(|e| {
        EndpointError::ConfigMalformed(format!("cache entry for group \"{}\": {}", group, e))
    })?;

    Ok(Some(policy))
}
