//! Client error taxonomy and per-call bookkeeping types.

use std::fmt;
use thiserror::Error;

/// Position of a backend in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetKind {
    /// The real backend. Only tried when `use_primary` is enabled.
    Primary,
    /// The mock backend.
    Secondary,
    /// The default backend, last in line.
    Tertiary,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Primary => "primary",
            TargetKind::Secondary => "secondary",
            TargetKind::Tertiary => "tertiary",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the resilient client.
///
/// The per-attempt variants name the target that produced them, so the
/// error the caller finally sees identifies the last backend tried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Target answered with a non-2xx status.
    #[error("{target} backend returned status {status}: {body}")]
    Status {
        target: TargetKind,
        status: u16,
        body: String,
    },

    /// Target did not answer within its configured timeout.
    #[error("{target} backend timed out after {timeout_ms} ms")]
    Timeout { target: TargetKind, timeout_ms: u64 },

    /// Connection-level failure (refused, reset, DNS).
    #[error("{target} backend unreachable: {message}")]
    Network { target: TargetKind, message: String },

    /// 2xx response whose body did not match the expected shape.
    #[error("{target} backend sent an undecodable body: {message}")]
    Decode { target: TargetKind, message: String },

    /// Path could not be joined onto a target's base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The client was built without any backend to try.
    #[error("No backend targets configured")]
    NoTargets,
}

impl ClientError {
    /// Target that produced the error, if any.
    pub fn target(&self) -> Option<TargetKind> {
        match self {
            ClientError::Status { target, .. }
            | ClientError::Timeout { target, .. }
            | ClientError::Network { target, .. }
            | ClientError::Decode { target, .. } => Some(*target),
            ClientError::InvalidUrl(_)
            | ClientError::Encode(_)
            | ClientError::HttpClient(_)
            | ClientError::NoTargets => None,
        }
    }

    /// HTTP status carried by the error, if the target answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout { .. })
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Progress of one logical call through the fallback chain.
///
/// ```text
/// NotStarted → TryingPrimary → {Success | TryingSecondary}
///            → {Success | TryingTertiary} → {Success | Failed}
/// ```
///
/// With the primary disabled the chain enters at `TryingSecondary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    NotStarted,
    TryingPrimary,
    TryingSecondary,
    TryingTertiary,
    Success,
    Failed,
}

impl CallState {
    /// State entered when an attempt against `kind` begins.
    pub fn trying(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Primary => CallState::TryingPrimary,
            TargetKind::Secondary => CallState::TryingSecondary,
            TargetKind::Tertiary => CallState::TryingTertiary,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CallState::Success | CallState::Failed)
    }
}

/// Outcome of a single attempt against one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    Status(u16),
    Timeout,
    Network,
    Decode,
}

impl AttemptOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            AttemptOutcome::Success => "success",
            AttemptOutcome::Status(_) => "status",
            AttemptOutcome::Timeout => "timeout",
            AttemptOutcome::Network => "network",
            AttemptOutcome::Decode => "decode",
        }
    }

    pub(crate) fn from_error(err: &ClientError) -> Self {
        match err {
            ClientError::Status { status, .. } => AttemptOutcome::Status(*status),
            ClientError::Timeout { .. } => AttemptOutcome::Timeout,
            ClientError::Decode { .. } => AttemptOutcome::Decode,
            _ => AttemptOutcome::Network,
        }
    }
}

/// One entry of a [`CallReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub target: TargetKind,
    pub outcome: AttemptOutcome,
}

/// Ordered record of the attempts made for one logical call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallReport {
    pub request_id: String,
    pub attempts: Vec<AttemptRecord>,
    pub final_state: CallState,
}

impl CallReport {
    pub(crate) fn new(request_id: String) -> Self {
        Self {
            request_id,
            attempts: Vec::new(),
            final_state: CallState::NotStarted,
        }
    }

    /// Targets in the order they were tried.
    pub fn targets(&self) -> Vec<TargetKind> {
        self.attempts.iter().map(|a| a.target).collect()
    }

    /// Target that served the call, if any did.
    pub fn served_by(&self) -> Option<TargetKind> {
        self.attempts
            .iter()
            .find(|a| a.outcome == AttemptOutcome::Success)
            .map(|a| a.target)
    }
}
