//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (ADMIN_API_*)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → used once to build the target chain and session
//! ```
//!
//! # Design Decisions
//! - Read once at startup; no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ClientConfig;
pub use schema::ObservabilityConfig;
pub use schema::OperatingMode;
pub use schema::TargetConfig;
