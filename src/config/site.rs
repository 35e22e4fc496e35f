use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static identity of the site shown in the landing page footer.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct SiteConfig {
    pub hostname: String,
    /// Defaults to `did:web:<hostname>` when omitted.
    pub service_did: Option<String>,
    #[serde(default = "default_app_version")]
    pub app_version: String,
    /// Headline of the landing page, also served by `/api/message`.
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default = "default_repo_url")]
    pub repo_url: String,
    #[serde(default = "default_build_url")]
    pub build_url: String,
}

impl SiteConfig {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            service_did: None,
            app_version: default_app_version(),
            message: default_message(),
            repo_url: default_repo_url(),
            build_url: default_build_url(),
        }
    }

    pub fn service_did(&self) -> String {
        match &self.service_did {
            Some(did) => did.clone(),
            None => format!("did:web:{}", self.hostname),
        }
    }
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_message() -> String {
    "\\m/".to_string()
}

fn default_repo_url() -> String {
    "https://github.com/elide-us/elideus-metal".to_string()
}

fn default_build_url() -> String {
    "https://github.com/elide-us/elideus-metal/actions".to_string()
}
