//! Login redirect strategies fired when a backend answers 401.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Sends the user back to the login entry point.
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self);
}

/// Logs the login entry point. Used by the CLI, which has no navigation
/// of its own: the user re-runs `login`.
#[derive(Debug, Clone)]
pub struct LogRedirect {
    login_url: String,
}

impl LogRedirect {
    pub fn new(login_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
        }
    }
}

impl LoginRedirect for LogRedirect {
    fn redirect_to_login(&self) {
        tracing::warn!(login_url = %self.login_url, "Session expired, login required");
    }
}

/// Counts redirects instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingRedirect {
    count: AtomicUsize,
}

impl RecordingRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
