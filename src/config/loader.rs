//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::{ClientConfig, OperatingMode};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {key}")]
    Env { key: String, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub const ENV_MODE: &str = "ADMIN_API_MODE";
pub const ENV_USE_PRIMARY: &str = "ADMIN_API_USE_PRIMARY";
pub const ENV_PRIMARY_URL: &str = "ADMIN_API_PRIMARY_URL";
pub const ENV_PRIMARY_TIMEOUT: &str = "ADMIN_API_PRIMARY_TIMEOUT_MS";
pub const ENV_MOCK_URL: &str = "ADMIN_API_MOCK_URL";
pub const ENV_MOCK_TIMEOUT: &str = "ADMIN_API_MOCK_TIMEOUT_MS";
pub const ENV_DEFAULT_URL: &str = "ADMIN_API_DEFAULT_URL";
pub const ENV_DEFAULT_TIMEOUT: &str = "ADMIN_API_DEFAULT_TIMEOUT_MS";
pub const ENV_LOGIN_URL: &str = "ADMIN_API_LOGIN_URL";
pub const ENV_TOKEN_PATH: &str = "ADMIN_API_TOKEN_PATH";

/// Load configuration: TOML file (optional), then process environment,
/// then validation. Called once at startup.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ClientConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment values onto `config`.
///
/// `lookup` abstracts the environment so tests need not touch process
/// state. Blank values are treated as unset.
pub fn apply_env_overrides<F>(config: &mut ClientConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(value) = get(ENV_MODE) {
        config.mode = value
            .parse::<OperatingMode>()
            .map_err(|_| invalid(ENV_MODE, &value))?;
    }
    if let Some(value) = get(ENV_USE_PRIMARY) {
        config.use_primary = parse_bool(&value).ok_or_else(|| invalid(ENV_USE_PRIMARY, &value))?;
    }

    if let Some(value) = get(ENV_PRIMARY_URL) {
        config.primary.base_url = value;
    }
    if let Some(value) = get(ENV_MOCK_URL) {
        config.secondary.base_url = value;
    }
    if let Some(value) = get(ENV_DEFAULT_URL) {
        config.tertiary.base_url = value;
    }

    if let Some(value) = get(ENV_PRIMARY_TIMEOUT) {
        config.primary.timeout_ms = parse_ms(ENV_PRIMARY_TIMEOUT, &value)?;
    }
    if let Some(value) = get(ENV_MOCK_TIMEOUT) {
        config.secondary.timeout_ms = parse_ms(ENV_MOCK_TIMEOUT, &value)?;
    }
    if let Some(value) = get(ENV_DEFAULT_TIMEOUT) {
        config.tertiary.timeout_ms = parse_ms(ENV_DEFAULT_TIMEOUT, &value)?;
    }

    if let Some(value) = get(ENV_LOGIN_URL) {
        config.login_url = value;
    }
    if let Some(value) = get(ENV_TOKEN_PATH) {
        config.token_path = value;
    }

    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_ms(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::Env {
        key: key.to_string(),
        value: value.to_string(),
    }
}
