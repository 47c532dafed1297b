//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides the port of `listener.bind_address`.
pub const ENV_PORT: &str = "PORT";
/// Sets `storage.connection_string`.
pub const ENV_MONGO_URI: &str = "MONGO_URI";
/// Replaces `cors.allowed_origin`.
pub const ENV_ALLOWED_ORIGIN: &str = "GATEWAY_ALLOWED_ORIGIN";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment
/// overrides, then validate.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => GatewayConfig::default(),
    };

    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: GatewayConfig, lookup: F) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(ENV_PORT).filter(|p| !p.is_empty()) {
        let bind = &config.listener.bind_address;
        let host = bind.rsplit_once(':').map_or(bind.as_str(), |(host, _)| host);
        config.listener.bind_address = format!("{host}:{port}");
    }

    if let Some(uri) = lookup(ENV_MONGO_URI).filter(|u| !u.is_empty()) {
        config.storage.connection_string = Some(uri);
    }

    if let Some(origin) = lookup(ENV_ALLOWED_ORIGIN).filter(|o| !o.is_empty()) {
        config.cors.allowed_origin = origin;
    }

    config
}
