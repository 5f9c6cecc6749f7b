//! Startup configuration loading from disk.

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use std::fs;
use std::path::Path;

/// Error type for startup configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate the startup configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Environment;

    #[test]
    fn parses_minimal_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.environment, Environment::Dev);
        assert!(config.routes.is_empty());
        assert!(config.urls.suppress_base_url_outside_prod);
    }

    #[test]
    fn parses_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            environment = "prod"

            [listener]
            bind_address = "127.0.0.1:9000"

            [context]
            scheme = "https"
            host = "example.com"
            https_port = 8443
            base_url = "/app"

            [urls]
            default_locale = "es"

            [i18n]
            enabled = true

            [[routes]]
            name = "home"
            path = "/"

            [[routes]]
            name = "blog_show"
            path = "/blog/{slug}"
            methods = ["GET", "POST"]

            [routes.options]
            expose = true
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Prod);
        assert_eq!(config.context.https_port, 8443);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].methods, vec!["GET"]);
        assert_eq!(config.routes[1].methods, vec!["GET", "POST"]);
        assert_eq!(
            config.routes[1].options.get("expose"),
            Some(&toml::Value::Boolean(true))
        );
        assert_eq!(config.urls.default_locale, "es");
        assert!(config.i18n.enabled);
    }
}
