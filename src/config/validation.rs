//! Configuration validation.
//!
//! Semantic checks that serde cannot express. Every problem is reported,
//! not just the first.

use std::fmt;
use url::Url;

use crate::config::schema::{ClientConfig, TargetConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_target("primary", &config.primary, &mut errors);
    validate_target("secondary", &config.secondary, &mut errors);
    validate_target("tertiary", &config.tertiary, &mut errors);

    if config.login_url.trim().is_empty() {
        errors.push(ValidationError::new("login_url", "must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_target(name: &str, target: &TargetConfig, errors: &mut Vec<ValidationError>) {
    match Url::parse(&target.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            format!("{}.base_url", name),
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            format!("{}.base_url", name),
            format!("invalid URL '{}': {}", target.base_url, e),
        )),
    }

    if target.timeout_ms == 0 {
        errors.push(ValidationError::new(
            format!("{}.timeout_ms", name),
            "must be greater than zero",
        ));
    }
}
