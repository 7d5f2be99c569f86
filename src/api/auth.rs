//! Login, logout and the current user.

use serde_json::Value;

use crate::api::types::{LoginRequest, LoginResponse, UserProfile};
use crate::api::AdminApi;
use crate::client::{ClientResult, Endpoint};

impl AdminApi {
    /// Authenticate and store the returned token for all later requests.
    ///
    /// A 2xx reply without a non-empty `access_token` does not decode and
    /// the next backend is tried. Failure of every backend is propagated;
    /// the existing token is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("/auth/login", &body).await?;

        if let Err(e) = self.client.session().tokens().set(response.access_token.clone()) {
            tracing::warn!(error = %e, "Logged in, but the token could not be persisted");
        }
        tracing::info!(user = %response.user.email, "Logged in");

        Ok(response)
    }

    /// Tell the backends the session ended, then drop the token whatever
    /// they answered.
    pub async fn logout(&self) {
        if let Err(e) = self.client.request::<Value>(&Endpoint::post("/auth/logout")).await {
            tracing::debug!(error = %e, "Logout not acknowledged by any backend");
        }
        if let Err(e) = self.client.session().tokens().clear() {
            tracing::warn!(error = %e, "Failed to remove persisted auth token");
        }
        tracing::info!("Logged out");
    }

    pub async fn current_user(&self) -> ClientResult<UserProfile> {
        self.client.get("/auth/me").await
    }
}
