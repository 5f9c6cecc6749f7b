//! Configuration schema definitions.
//!
//! This module defines the startup configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root startup configuration for the routing exposure service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Route table definitions, in registration order.
    pub routes: Vec<RouteDefinition>,

    /// Defaults for the router context (ports, base URL, fallback host).
    pub context: ContextConfig,

    /// Exposure config file settings.
    pub exposure: ExposureFileConfig,

    /// Runtime environment marker.
    pub environment: Environment,

    /// Base-path policy and locale settings.
    pub urls: UrlPolicyConfig,

    /// Internationalized-routing settings.
    pub i18n: I18nConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// A single route table entry.
///
/// The table registration order is the order of `[[routes]]` entries in the
/// config file; that order is preserved all the way into the serialized
/// payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteDefinition {
    /// Route identifier, unique within the table.
    pub name: String,

    /// Path pattern (e.g., "/blog/{slug}").
    pub path: String,

    /// Allowed HTTP methods.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,

    /// Opaque declared options. May carry a legacy `expose` flag which is
    /// parsed but not evaluated by the exposure policy.
    #[serde(default)]
    pub options: BTreeMap<String, toml::Value>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

/// Router context defaults.
///
/// Scheme and host are normally taken from the incoming request; the values
/// here are the fallbacks when the request carries neither, plus the
/// configured ports and base URL which have no per-request source.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Fallback scheme ("http" or "https").
    pub scheme: String,

    /// Fallback host.
    pub host: String,

    /// Port the service is reachable on over http.
    pub http_port: u16,

    /// Port the service is reachable on over https.
    pub https_port: u16,

    /// Base URL path prefix (e.g., "/app.php").
    pub base_url: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            http_port: 80,
            https_port: 443,
            base_url: String::new(),
        }
    }
}

/// Exposure config file settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExposureFileConfig {
    /// Path to the exposure config file, re-read on every request.
    pub config_path: String,
}

impl Default for ExposureFileConfig {
    fn default() -> Self {
        Self {
            config_path: "js_routing.toml".to_string(),
        }
    }
}

/// Runtime environment marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn is_prod(self) -> bool {
        self == Environment::Prod
    }
}

/// Base-path and locale policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UrlPolicyConfig {
    /// When enabled, the base URL resolves to the empty string unless the
    /// runtime environment is `prod`. Historical workaround for a caching
    /// interaction with non-production front controllers.
    pub suppress_base_url_outside_prod: bool,

    /// Locale used when the request does not specify one.
    pub default_locale: String,
}

impl Default for UrlPolicyConfig {
    fn default() -> Self {
        Self {
            suppress_base_url_outside_prod: true,
            default_locale: "en".to_string(),
        }
    }
}

/// Internationalized-routing settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Enable locale-prefixed route names in the payload.
    pub enabled: bool,

    /// Marker appended to the locale to form the route-name prefix.
    pub prefix_marker: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix_marker: "__RG__".to_string(),
        }
    }
}
