//! Resilient admin API client.
//!
//! # Data Flow
//! ```text
//! Endpoint (path, method, body, query)
//!     → resilient.rs (fallback chain, one attempt per target)
//!         → target.rs (resolve URL against primary / mock / default)
//!         → transport.rs (send with bearer token + request id)
//!         → timeout per target
//!     → first 2xx body decoded and returned
//!     → otherwise the tertiary's error
//! ```
//!
//! # Design Decisions
//! - Sequential attempts, never raced
//! - No retry within a target; resilience comes from the chain
//! - 401 handling is a side effect, the chain still decides the result

pub mod endpoint;
pub mod resilient;
pub mod target;
pub mod transport;
pub mod types;

pub use endpoint::{Endpoint, Method};
pub use resilient::ResilientClient;
pub use target::Target;
pub use transport::{AttemptRequest, HttpTransport, RawResponse, Transport, TransportError};
pub use types::{AttemptOutcome, AttemptRecord, CallReport, CallState, ClientError, ClientResult, TargetKind};
