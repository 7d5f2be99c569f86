//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the admin API client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Operating mode; development suppresses the login redirect on 401.
    pub mode: OperatingMode,

    /// Whether the primary (real) backend is tried at all.
    pub use_primary: bool,

    /// Real backend.
    pub primary: TargetConfig,

    /// Mock backend, tried second.
    pub secondary: TargetConfig,

    /// Default backend, tried last.
    pub tertiary: TargetConfig,

    /// Login entry point the user is sent to after a 401.
    pub login_url: String,

    /// File the CLI persists the auth token to.
    pub token_path: String,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: OperatingMode::Production,
            use_primary: true,
            primary: TargetConfig {
                base_url: "http://localhost:8000/api".to_string(),
                timeout_ms: 10_000,
            },
            secondary: TargetConfig {
                base_url: "http://localhost:3001/api".to_string(),
                timeout_ms: 5_000,
            },
            tertiary: TargetConfig {
                base_url: "http://localhost:8080/api".to_string(),
                timeout_ms: 15_000,
            },
            login_url: "/login".to_string(),
            token_path: ".tron-admin/session.json".to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    Development,
    #[default]
    Production,
}

impl std::str::FromStr for OperatingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(OperatingMode::Development),
            "production" | "prod" => Ok(OperatingMode::Production),
            other => Err(format!("unknown operating mode '{}'", other)),
        }
    }
}

/// One backend of the fallback chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Base URL every endpoint path is joined onto (e.g. "http://host/api").
    pub base_url: String,

    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
