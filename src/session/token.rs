//! Process-wide auth token.

use arc_swap::ArcSwapOption;
use std::sync::Arc;

use crate::session::storage::{StorageResult, TokenStorage};

/// Storage key the token is persisted under.
pub const TOKEN_KEY: &str = "auth_token";

/// Holds at most one bearer token and mirrors it into storage.
///
/// Reads come from an in-memory copy so attaching the token to a request
/// never touches storage. Writes are last-writer-wins.
pub struct TokenStore {
    current: ArcSwapOption<String>,
    storage: Arc<dyn TokenStorage>,
}

impl TokenStore {
    /// Create a store, restoring any token persisted by a previous run.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let restored = match storage.load(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore auth token, starting signed out");
                None
            }
        };

        if restored.is_some() {
            tracing::debug!("Restored auth token from storage");
        }

        Self {
            current: ArcSwapOption::new(restored.map(Arc::new)),
            storage,
        }
    }

    /// Current token, if one is set.
    pub fn get(&self) -> Option<String> {
        self.current.load_full().map(|t| t.as_ref().clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.load().is_some()
    }

    /// Replace the token. An empty string clears it instead.
    ///
    /// The in-memory token changes even if persisting it fails.
    pub fn set(&self, token: impl Into<String>) -> StorageResult<()> {
        let token = token.into();
        if token.is_empty() {
            return self.clear();
        }
        self.current.store(Some(Arc::new(token.clone())));
        self.storage.store(TOKEN_KEY, &token)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.current.store(None);
        self.storage.remove(TOKEN_KEY)
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("TokenStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
