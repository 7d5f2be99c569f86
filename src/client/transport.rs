//! Transport seam between the fallback chain and the network.
//!
//! The resilient client only needs "send this request to that target and
//! tell me what came back". Keeping that behind [`Transport`] lets the
//! chain be driven by a scripted fake in tests, while [`HttpTransport`]
//! does the real work over `reqwest`.
//!
//! Timeouts are not enforced here; the client wraps every `send` in the
//! target's deadline.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::client::endpoint::Method;
use crate::client::target::Target;

/// Header carrying the per-call correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A fully resolved request for one attempt.
#[derive(Debug, Clone)]
pub struct AttemptRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
    /// Token sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    pub request_id: String,
}

/// Status and raw body of a response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Network(String),

    /// Timeout reported by the underlying HTTP stack itself.
    #[error("transport timed out")]
    Timeout,
}

/// Sends a single request to a single target.
pub trait Transport: Send + Sync {
    fn send<'a>(
        &'a self,
        target: &'a Target,
        request: AttemptRequest,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>>;
}

/// `reqwest`-backed transport shared by all targets.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tron-admin-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured `reqwest` client (proxy settings, pooling).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn execute(&self, request: AttemptRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .header(REQUEST_ID_HEADER, request.request_id);

        if let Some(token) = request.bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let resp = builder.send().await.map_err(classify)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(classify)?;

        Ok(RawResponse { status, body })
    }
}

impl Transport for HttpTransport {
    fn send<'a>(
        &'a self,
        _target: &'a Target,
        request: AttemptRequest,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
        self.execute(request).boxed()
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}
