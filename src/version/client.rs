use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::config::VersionEndpointConfig;

/// Shown while the version is unknown, and kept when fetching it fails.
pub const VERSION_PLACEHOLDER: &str = "Loading version...";

/// Body of the version endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub ffmpeg_version: String,
}

/// The only failure a version fetch reports: transport errors, timeouts,
/// non-success statuses and malformed bodies all end up here.
#[derive(Debug, Error)]
#[error("version fetch failed: {reason}")]
pub struct VersionFetchError {
    reason: String,
}

impl VersionFetchError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Anything that can tell a view which version to display.
#[async_trait]
pub trait VersionSource: Send + Sync {
    async fn fetch(&self) -> Result<VersionInfo, VersionFetchError>;

    /// Fetches once without retrying. A failure is logged here and nowhere
    /// else, so callers only decide what to show instead.
    async fn fetch_or_log(&self) -> Option<VersionInfo> {
        match self.fetch().await {
            Ok(info) => Some(info),
            Err(e) => {
                error!(error = %e, "Error fetching ffmpeg version");
                None
            }
        }
    }
}

/// HTTP client for the `{ "ffmpeg_version": ... }` endpoint.
pub struct VersionClient {
    config: VersionEndpointConfig,
    client: reqwest::Client,
}

impl VersionClient {
    pub fn new(config: &VersionEndpointConfig) -> Self {
        debug!(url = config.url.as_str(), "Creating version client");
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VersionSource for VersionClient {
    async fn fetch(&self) -> Result<VersionInfo, VersionFetchError> {
        debug!("Sending version request to: {}", self.config.url);
        let response = self
            .client
            .get(&self.config.url)
            .timeout(Duration::from_millis(self.config.timeout_in_ms))
            .send()
            .await
            .map_err(|e| VersionFetchError::new(format!("error sending request: {}", e)))?;

        if !response.status().is_success() {
            return Err(VersionFetchError::new(format!(
                "unexpected status code: {}",
                response.status()
            )));
        }

        response
            .json::<VersionInfo>()
            .await
            .map_err(|e| VersionFetchError::new(format!("error parsing JSON: {}", e)))
    }
}
