//! Per-request exposure configuration.
//!
//! # Responsibilities
//! - Parse the exposure config file (`js_routing` top-level table)
//! - Provide the `routes_to_expose` and `cache` mappings to the request path
//! - Abstract the config source so tests can inject fixtures
//!
//! # Design Decisions
//! - Re-read on every request: exposure changes take effect without restart
//! - Loaded once per request and shared by the exposure policy and the
//!   cache resolver, so a single request never sees two versions
//! - Unexpected shapes inside `routes_to_expose` are tolerated and mean
//!   "not exposed"; a malformed `cache` table is an operator error instead

use crate::error::EndpointError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Whole exposure config file. Everything lives under a single top-level
/// `js_routing` table.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ExposureDocument {
    pub js_routing: ExposureConfig,
}

/// The `js_routing` table of the exposure config file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ExposureConfig {
    /// Route identifier → exposure rule. Routes without an entry are never
    /// exposed (opt-in model).
    pub routes_to_expose: BTreeMap<String, ExposureRule>,

    /// Group name → cache descriptor. Kept as a raw value here; interpreted
    /// by the cache resolver so a malformed table can be reported as a
    /// configuration error rather than a parse failure of the whole file.
    pub cache: Option<toml::Value>,
}

/// A single `routes_to_expose` entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExposureRule {
    /// `true` exposes the route to every group. `false` exposes it to none.
    Everyone(bool),

    /// Expose only to the listed groups.
    Groups(Vec<String>),

    /// Any other shape. Tolerated, treated as "not exposed".
    Other(toml::Value),
}

impl ExposureRule {
    /// Whether this rule exposes the route to `group`.
    pub fn exposes_to(&self, group: &str) -> bool {
        match self {
            ExposureRule::Everyone(all) => *all,
            ExposureRule::Groups(groups) => groups.iter().any(|g| g == group),
            ExposureRule::Other(_) => false,
        }
    }
}

/// Source of the per-request exposure configuration.
pub trait ExposureSource: Send + Sync {
    fn load(&self) -> Result<ExposureConfig, EndpointError>;
}

/// File-backed exposure source. Reads and parses the file on every call.
#[derive(Debug, Clone)]
pub struct FileExposureSource {
    path: PathBuf,
}

impl FileExposureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExposureSource for FileExposureSource {
    fn load(&self) -> Result<ExposureConfig, EndpointError> {
        let content = fs::read_to_string(&self.path)?;
        let document: ExposureDocument = toml::from_str(&content)?;
        Ok(document.js_routing)
    }
}

/// In-memory exposure source, for tests and embedded setups.
#[derive(Debug, Clone, Default)]
pub struct StaticExposureSource {
    config: ExposureConfig,
}

impl StaticExposureSource {
    pub fn new(config: ExposureConfig) -> Self {
        Self { config }
    }
}

impl ExposureSource for StaticExposureSource {
    fn load(&self) -> Result<ExposureConfig, EndpointError> {
        Ok(self.config.clone())
    }
}
