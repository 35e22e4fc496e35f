use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the landing page fetches its version string from.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct VersionEndpointConfig {
    pub url: String,
    #[serde(default = "default_timeout_in_ms")]
    pub timeout_in_ms: u64,
}

impl VersionEndpointConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_in_ms: default_timeout_in_ms(),
        }
    }
}

fn default_timeout_in_ms() -> u64 {
    3000
}

/// The binary probed by `/api/ffmpeg`.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ProbeConfig {
    #[serde(default = "default_binary")]
    pub binary: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

fn default_binary() -> String {
    "ffmpeg".to_string()
}
