//! Request context resolution.
//!
//! # Responsibilities
//! - Derive the absolute-URL components clients need: scheme, host with an
//!   optional non-standard-port suffix, base path, locale prefix
//!
//! # Design Decisions
//! - Pure function of explicit inputs; nothing is read from ambient state
//! - Never cached across requests: scheme and host vary per request
//! - The port check is scheme-specific. An http request is never suffixed
//!   based on the https port, and vice versa
//! - Base path suppression outside prod is an explicit, testable policy,
//!   not a hard-coded environment string comparison

use crate::config::schema::{Environment, I18nConfig, UrlPolicyConfig};
use crate::routing::table::RouterContext;

/// Absolute-URL components for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// Active scheme.
    pub scheme: String,

    /// Host, suffixed with ":{port}" when the active scheme's configured
    /// port is non-standard.
    pub host: String,

    /// Base URL path prefix, possibly suppressed by policy.
    pub base_url: String,

    /// Locale route-name prefix, empty unless i18n routing is enabled.
    pub prefix: String,
}

/// Policy governing base URL resolution.
///
/// Suppressing the base path outside prod is a historical workaround for a
/// caching interaction with non-production front controllers; it is kept
/// visible here so the behavior is configurable and testable.
#[derive(Debug, Clone, Copy)]
pub struct BaseUrlPolicy {
    pub suppress_outside_prod: bool,
    pub environment: Environment,
}

impl BaseUrlPolicy {
    pub fn new(urls: &UrlPolicyConfig, environment: Environment) -> Self {
        Self {
            suppress_outside_prod: urls.suppress_base_url_outside_prod,
            environment,
        }
    }

    fn suppresses(&self) -> bool {
        self.suppress_outside_prod && !self.environment.is_prod()
    }
}

/// Locale prefix strategy for internationalized routing.
///
/// Present only when the i18n routing capability is enabled; absence means
/// the payload carries an empty prefix.
#[derive(Debug, Clone)]
pub struct LocalePrefix {
    marker: String,
}

impl LocalePrefix {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Build the strategy from config, if enabled.
    pub fn from_config(config: &I18nConfig) -> Option<Self> {
        config
            .enabled
            .then(|| Self::new(config.prefix_marker.clone()))
    }

    pub fn prefix_for(&self, locale: &str) -> String {
        format!("{}{}", locale, self.marker)
    }
}

/// Resolve the request context from the router's view of the request.
pub fn resolve_context(
    router_ctx: &RouterContext,
    locale: &str,
    base_url_policy: BaseUrlPolicy,
    locale_prefix: Option<&LocalePrefix>,
) -> RequestContext {
    let host = match router_ctx.scheme.as_str() {
        "http" if router_ctx.http_port != 80 => {
            format!("{}:{}", router_ctx.host, router_ctx.http_port)
        }
        "https" if router_ctx.https_port != 443 => {
            format!("{}:{}", router_ctx.host, router_ctx.https_port)
        }
        _ => router_ctx.host.clone(),
    };

    let base_url = if base_url_policy.suppresses() {
        String::new()
    } else {
        router_ctx.base_url.clone()
    };

    let prefix = locale_prefix
        .map(|strategy| strategy.prefix_for(locale))
        .unwrap_or_default();

    RequestContext {
        scheme: router_ctx.scheme.clone(),
        host,
        base_url,
        prefix,
    }
}
