//! Resilient client with ordered fallback across backend targets.
//!
//! # Responsibilities
//! - Try each target once, in order, returning the first success
//! - Bound every attempt by the target's own timeout
//! - Attach the current bearer token to every attempt
//! - Clear the session on 401, whichever target sent it
//! - Surface only the last target's error when all fail

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use uuid::Uuid;

use crate::client::endpoint::Endpoint;
use crate::client::target::Target;
use crate::client::transport::{AttemptRequest, HttpTransport, Transport, TransportError};
use crate::client::types::{
    AttemptOutcome, AttemptRecord, CallReport, CallState, ClientError, ClientResult, TargetKind,
};
use crate::config::schema::ClientConfig;
use crate::observability::metrics;
use crate::session::Session;

struct Inner {
    targets: Vec<Target>,
    transport: Arc<dyn Transport>,
    session: Arc<Session>,
}

/// Admin API client that falls back from primary to mock to default.
///
/// Cheap to clone; clones share targets, transport and session.
#[derive(Clone)]
pub struct ResilientClient {
    inner: Arc<Inner>,
}

impl ResilientClient {
    /// Build a client over an explicit, ordered target list.
    pub fn new(targets: Vec<Target>, transport: Arc<dyn Transport>, session: Arc<Session>) -> Self {
        Self {
            inner: Arc::new(Inner {
                targets,
                transport,
                session,
            }),
        }
    }

    /// Build the standard chain from configuration.
    ///
    /// The primary is left out entirely when `use_primary` is off.
    pub fn from_config(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        session: Arc<Session>,
    ) -> ClientResult<Self> {
        let mut targets = Vec::with_capacity(3);
        if config.use_primary {
            targets.push(Target::from_config(TargetKind::Primary, &config.primary)?);
        }
        targets.push(Target::from_config(TargetKind::Secondary, &config.secondary)?);
        targets.push(Target::from_config(TargetKind::Tertiary, &config.tertiary)?);

        tracing::info!(
            use_primary = config.use_primary,
            mode = ?config.mode,
            targets = targets.len(),
            "Admin API client initialized"
        );

        Ok(Self::new(targets, transport, session))
    }

    /// Build the standard chain over the `reqwest` transport.
    pub fn with_http(config: &ClientConfig, session: Arc<Session>) -> ClientResult<Self> {
        let transport = HttpTransport::new()?;
        Self::from_config(config, Arc::new(transport), session)
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.inner.session
    }

    pub fn targets(&self) -> &[Target] {
        &self.inner.targets
    }

    /// Run one logical call through the fallback chain.
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> ClientResult<T> {
        self.request_with_report(endpoint).await.0
    }

    /// Like [`request`](Self::request), also returning which targets were
    /// tried and how each attempt ended.
    pub async fn request_with_report<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> (ClientResult<T>, CallReport) {
        let request_id = Uuid::new_v4().to_string();
        let mut report = CallReport::new(request_id.clone());
        let mut last_error = None;

        for target in &self.inner.targets {
            report.final_state = CallState::trying(target.kind);

            tracing::debug!(
                request_id = %request_id,
                target = %target.kind,
                method = %endpoint.method,
                path = %endpoint.path,
                "Attempting backend"
            );

            let started = Instant::now();
            let result = self.attempt::<T>(target, endpoint, &request_id).await;
            let elapsed = started.elapsed();

            match result {
                Ok(value) => {
                    tracing::debug!(
                        request_id = %request_id,
                        target = %target.kind,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Backend attempt succeeded"
                    );
                    metrics::record_attempt(target.kind.as_str(), AttemptOutcome::Success.label(), elapsed);
                    metrics::record_call("success");

                    report.attempts.push(AttemptRecord {
                        target: target.kind,
                        outcome: AttemptOutcome::Success,
                    });
                    report.final_state = CallState::Success;
                    return (Ok(value), report);
                }
                Err(e) => {
                    let outcome = AttemptOutcome::from_error(&e);
                    tracing::warn!(
                        request_id = %request_id,
                        target = %target.kind,
                        elapsed_ms = elapsed.as_millis() as u64,
                        error = %e,
                        "Backend attempt failed"
                    );
                    metrics::record_attempt(target.kind.as_str(), outcome.label(), elapsed);

                    report.attempts.push(AttemptRecord {
                        target: target.kind,
                        outcome,
                    });
                    last_error = Some(e);
                }
            }
        }

        report.final_state = CallState::Failed;
        metrics::record_call("failed");

        let err = last_error.unwrap_or(ClientError::NoTargets);
        tracing::error!(
            request_id = %request_id,
            method = %endpoint.method,
            path = %endpoint.path,
            error = %err,
            "All backends failed"
        );
        (Err(err), report)
    }

    /// One attempt against one target. Never retried.
    async fn attempt<T: DeserializeOwned>(
        &self,
        target: &Target,
        endpoint: &Endpoint,
        request_id: &str,
    ) -> ClientResult<T> {
        let request = AttemptRequest {
            method: endpoint.method,
            url: target.url_for(&endpoint.path, &endpoint.query)?,
            body: endpoint.body().cloned(),
            bearer: self.inner.session.tokens().get(),
            request_id: request_id.to_string(),
        };

        let response = match timeout(target.timeout, self.inner.transport.send(target, request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(TransportError::Network(message))) => {
                return Err(ClientError::Network {
                    target: target.kind,
                    message,
                })
            }
            Ok(Err(TransportError::Timeout)) | Err(_) => {
                return Err(ClientError::Timeout {
                    target: target.kind,
                    timeout_ms: target.timeout_ms(),
                })
            }
        };

        if !response.is_success() {
            if response.status == 401 {
                self.inner.session.handle_unauthorized(target.kind);
            }
            return Err(ClientError::Status {
                target: target.kind,
                status: response.status,
                body: response.body,
            });
        }

        // 204 and friends decode as JSON null.
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(body).map_err(|e| ClientError::Decode {
            target: target.kind,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(&Endpoint::get(path)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.request(&Endpoint::post(path).json(body)?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.request(&Endpoint::put(path).json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(&Endpoint::delete(path)).await
    }
}

impl std::fmt::Debug for ResilientClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientClient")
            .field("targets", &self.inner.targets)
            .field("session", &self.inner.session)
            .finish()
    }
}
