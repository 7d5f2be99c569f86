//! Resilient client for the TRON energy-rental admin API.
//!
//! Every logical operation is tried against an ordered chain of backends
//! and only fails if all of them do:
//!
//! ```text
//!   AdminApi::partners(1, 10)
//!        │
//!        ▼
//!   ResilientClient ──▶ primary  (if use_primary) ──✗──┐
//!        │                                             ▼
//!        │             secondary (mock)           ──✗──┐
//!        │                                             ▼
//!        │             tertiary  (default)        ──✗──▶ last error
//!        │
//!        └── every attempt: Authorization: Bearer <token>, X-Request-Id
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod observability;
pub mod session;

pub use api::AdminApi;
pub use client::{ClientError, Endpoint, Method, ResilientClient};
pub use config::ClientConfig;
pub use session::Session;
