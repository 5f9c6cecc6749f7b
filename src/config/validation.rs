//! Startup configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route table integrity (unique names, well-formed paths)
//! - Validate context values (scheme, ports)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::AppConfig;
use std::collections::HashSet;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate an already-deserialized configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.context.scheme.as_str() {
        "http" | "https" => {}
        other => errors.push(ValidationError {
            field: "context.scheme".to_string(),
            message: format!("must be \"http\" or \"https\", got \"{}\"", other),
        }),
    }

    if config.context.http_port == 0 {
        errors.push(ValidationError {
            field: "context.http_port".to_string(),
            message: "must be non-zero".to_string(),
        });
    }
    if config.context.https_port == 0 {
        errors.push(ValidationError {
            field: "context.https_port".to_string(),
            message: "must be non-zero".to_string(),
        });
    }

    if config.exposure.config_path.is_empty() {
        errors.push(ValidationError {
            field: "exposure.config_path".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (i, route) in config.routes.iter().enumerate() {
        let field = format!("routes[{}]", i);

        if route.name.is_empty() {
            errors.push(ValidationError {
                field: format!("{}.name", field),
                message: "must not be empty".to_string(),
            });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError {
                field: format!("{}.name", field),
                message: format!("duplicate route name \"{}\"", route.name),
            });
        }

        if !route.path.starts_with('/') {
            errors.push(ValidationError {
                field: format!("{}.path", field),
                message: format!("must start with \"/\", got \"{}\"", route.path),
            });
        }

        if route.methods.is_empty() {
            errors.push(ValidationError {
                field: format!("{}.methods", field),
                message: "must list at least one method".to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
