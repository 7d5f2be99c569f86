//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client, session:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms via the `metrics` facade)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → whatever recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Every attempt is logged with its target and request id
//! - The library never installs a metrics exporter itself

pub mod logging;
pub mod metrics;
