//! Typed admin API operations.
//!
//! # Responsibilities
//! - Map each logical operation onto a fixed path and method
//! - Decide per operation what "every backend failed" means
//! - Keep the session in step with login and logout
//!
//! # Total-failure policy
//! ```text
//! dashboard_stats, energy_pool   → degrade to an empty/zeroed value
//! logout                         → best-effort, token always cleared
//! everything else                → propagate the last backend's error
//! ```
//!
//! The partner admin portal and the super admin dashboard share this one
//! surface; the backends decide what each role may see.

pub mod admins;
pub mod auth;
pub mod dashboard;
pub mod energy;
pub mod fees;
pub mod partners;
pub mod types;

use serde::de::DeserializeOwned;

use crate::client::{Endpoint, ResilientClient};

pub use types::*;

/// Entry point for every admin API operation.
#[derive(Debug, Clone)]
pub struct AdminApi {
    client: ResilientClient,
}

impl AdminApi {
    pub fn new(client: ResilientClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ResilientClient {
        &self.client
    }

    /// Run `endpoint`, substituting `T::default()` if every backend fails.
    async fn request_or_default<T>(&self, endpoint: &Endpoint) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.client.request(endpoint).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    path = %endpoint.path,
                    error = %e,
                    "All backends failed, using default value"
                );
                T::default()
            }
        }
    }
}

/// Scripted transport shared by the operation tests.
#[cfg(test)]
pub(crate) mod testing {
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::AdminApi;
    use crate::client::{
        AttemptRequest, Method, RawResponse, ResilientClient, Target, TargetKind, Transport, TransportError,
    };
    use crate::config::OperatingMode;
    use crate::session::Session;

    type RouteKey = (Option<TargetKind>, Method, String);

    /// Answers by `(method, path)`, optionally pinned to one target;
    /// unknown routes refuse.
    #[derive(Default)]
    pub struct RouteTransport {
        routes: HashMap<RouteKey, (u16, Value)>,
        pub seen: Mutex<Vec<AttemptRequest>>,
    }

    impl RouteTransport {
        /// Same reply from every target.
        pub fn route(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
            self.routes.insert((None, method, path.to_string()), (status, body));
            self
        }

        /// Reply from `kind` only; takes precedence over [`route`](Self::route).
        pub fn route_on(mut self, kind: TargetKind, method: Method, path: &str, status: u16, body: Value) -> Self {
            self.routes.insert((Some(kind), method, path.to_string()), (status, body));
            self
        }

        pub fn last(&self) -> AttemptRequest {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }

        pub fn count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    impl Transport for RouteTransport {
        fn send<'a>(
            &'a self,
            target: &'a Target,
            request: AttemptRequest,
        ) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
            let path = format!(
                "/{}",
                request.url.path().trim_start_matches(target.base_url.path())
            );
            let reply = self
                .routes
                .get(&(Some(target.kind), request.method, path.clone()))
                .or_else(|| self.routes.get(&(None, request.method, path)))
                .cloned();
            self.seen.lock().unwrap().push(request);

            async move {
                match reply {
                    Some((status, body)) => Ok(RawResponse {
                        status,
                        body: body.to_string(),
                    }),
                    None => Err(TransportError::Network("connection refused".into())),
                }
            }
            .boxed()
        }
    }

    pub fn api(transport: RouteTransport) -> (AdminApi, Arc<RouteTransport>) {
        let transport = Arc::new(transport);
        let targets = vec![
            Target::new(TargetKind::Secondary, "http://mock.test/api", Duration::from_secs(1)).unwrap(),
            Target::new(TargetKind::Tertiary, "http://default.test/api", Duration::from_secs(1)).unwrap(),
        ];
        let session = Arc::new(Session::in_memory(OperatingMode::Production));
        let client = ResilientClient::new(targets, transport.clone(), session);
        (AdminApi::new(client), transport)
    }
}
