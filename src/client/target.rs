//! Backend targets.
//!
//! # Responsibilities
//! - Represent one backend of the fallback chain (kind, base URL, timeout)
//! - Resolve endpoint paths against the base URL
//!
//! The primary, mock and default backends used to be three separately
//! wired clients; here they are one type iterated in order.

use std::time::Duration;
use url::Url;

use crate::client::types::{ClientError, ClientResult, TargetKind};
use crate::config::schema::TargetConfig;

/// A single backend of the fallback chain.
#[derive(Debug, Clone)]
pub struct Target {
    pub kind: TargetKind,
    /// Base URL, normalised to end with `/`.
    pub base_url: Url,
    pub timeout: Duration,
}

impl Target {
    pub fn new(kind: TargetKind, base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{} base URL '{}': {}", kind, base_url, e)))?;

        // `Url::join` replaces the last segment unless the path ends in `/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            kind,
            base_url,
            timeout,
        })
    }

    pub fn from_config(kind: TargetKind, config: &TargetConfig) -> ClientResult<Self> {
        Self::new(kind, &config.base_url, Duration::from_millis(config.timeout_ms))
    }

    /// Full URL for `path`, keeping the base URL's own path prefix.
    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> ClientResult<Url> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}
