//! Metrics collection.
//!
//! # Metrics
//! - `admin_client_attempts_total` (counter): attempts by target, outcome
//! - `admin_client_attempt_duration_seconds` (histogram): latency by target
//! - `admin_client_calls_total` (counter): logical calls by final outcome
//! - `admin_client_unauthorized_total` (counter): 401 responses by target
//!
//! Recorded through the `metrics` facade; without an installed recorder
//! every call is a no-op.

use std::time::Duration;

/// Record one attempt against one target.
pub fn record_attempt(target: &'static str, outcome: &'static str, elapsed: Duration) {
    ::metrics::counter!("admin_client_attempts_total", "target" => target, "outcome" => outcome).increment(1);
    ::metrics::histogram!("admin_client_attempt_duration_seconds", "target" => target)
        .record(elapsed.as_secs_f64());
}

/// Record the end of a logical call.
pub fn record_call(outcome: &'static str) {
    ::metrics::counter!("admin_client_calls_total", "outcome" => outcome).increment(1);
}

pub fn record_unauthorized(target: &'static str) {
    ::metrics::counter!("admin_client_unauthorized_total", "target" => target).increment(1);
}
