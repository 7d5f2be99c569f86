//! Session subsystem.
//!
//! # Data Flow
//! ```text
//! login succeeds
//!     → token.rs (TokenStore::set, mirrored into storage.rs)
//!     → every attempt on every target reads TokenStore::get
//!
//! any target answers 401
//!     → Session::handle_unauthorized
//!     → token cleared
//!     → redirect.rs strategy (production mode only)
//! ```
//!
//! # Design Decisions
//! - One token per process, swapped atomically, no locks across awaits
//! - Persistence is injected: memory for tests, JSON file for the CLI
//! - Navigation is injected so the fallback chain has no UI dependency

pub mod redirect;
pub mod storage;
pub mod token;

use std::sync::Arc;

use crate::client::TargetKind;
use crate::config::schema::OperatingMode;
use crate::observability::metrics;

pub use redirect::{LogRedirect, LoginRedirect, RecordingRedirect};
pub use storage::{FileStorage, MemoryStorage, StorageError, TokenStorage};
pub use token::TokenStore;

/// Auth state shared by every clone of the client.
pub struct Session {
    tokens: TokenStore,
    mode: OperatingMode,
    redirect: Arc<dyn LoginRedirect>,
}

impl Session {
    pub fn new(
        storage: Arc<dyn TokenStorage>,
        mode: OperatingMode,
        redirect: Arc<dyn LoginRedirect>,
    ) -> Self {
        Self {
            tokens: TokenStore::new(storage),
            mode,
            redirect,
        }
    }

    /// In-memory session that never redirects anywhere visible.
    pub fn in_memory(mode: OperatingMode) -> Self {
        Self::new(
            Arc::new(MemoryStorage::new()),
            mode,
            Arc::new(RecordingRedirect::new()),
        )
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// React to one 401 response from `target`.
    ///
    /// Fires once per response: a call that collects 401s from two targets
    /// clears twice.
    ///
    /// The token is cleared in every mode, development included; a caller
    /// in development mode should not expect the token to survive a 401.
    /// Only the login redirect is skipped in development.
    pub fn handle_unauthorized(&self, target: TargetKind) {
        metrics::record_unauthorized(target.as_str());

        if let Err(e) = self.tokens.clear() {
            tracing::warn!(error = %e, "Failed to remove persisted auth token");
        }

        if self.mode == OperatingMode::Development {
            tracing::warn!(target = %target, "Unauthorized response, token cleared (development mode, no redirect)");
            return;
        }

        tracing::warn!(target = %target, "Unauthorized response, token cleared, redirecting to login");
        self.redirect.redirect_to_login();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("tokens", &self.tokens)
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: OperatingMode) -> (Session, Arc<RecordingRedirect>) {
        let redirect = Arc::new(RecordingRedirect::new());
        let session = Session::new(Arc::new(MemoryStorage::new()), mode, redirect.clone());
        (session, redirect)
    }

    #[test]
    fn test_unauthorized_in_production() {
        let (session, redirect) = session(OperatingMode::Production);
        session.tokens().set("tok123").unwrap();

        session.handle_unauthorized(TargetKind::Secondary);

        assert!(session.tokens().get().is_none());
        assert_eq!(redirect.count(), 1);
    }

    #[test]
    fn test_unauthorized_in_development_skips_redirect() {
        let (session, redirect) = session(OperatingMode::Development);
        session.tokens().set("tok123").unwrap();

        session.handle_unauthorized(TargetKind::Primary);

        assert!(session.tokens().get().is_none());
        assert_eq!(redirect.count(), 0);
    }
}
