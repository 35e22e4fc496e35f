use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::endpoints::{ProbeConfig, VersionEndpointConfig};
use super::logging::LoggingConfig;
use super::session::SessionConfig;
use super::site::SiteConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: listener, site identity, session, endpoints and logging.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    pub site: SiteConfig,
    #[serde(default)]
    pub session: SessionConfig,
    /// Defaults to this server's own `/api/ffmpeg` on the `bind_address` port.
    pub version_endpoint: Option<VersionEndpointConfig>,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

impl ConfigV1 {
    /// The configured version endpoint, or the local `/api/ffmpeg` when none is set.
    pub fn version_endpoint(&self) -> VersionEndpointConfig {
        match &self.version_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => {
                let port = self
                    .bind_address
                    .rsplit_once(':')
                    .map(|(_, port)| port)
                    .unwrap_or("80");
                VersionEndpointConfig::new(format!("http://127.0.0.1:{}/api/ffmpeg", port))
            }
        }
    }
}

/// Extracts a `ConfigV1` from any figment, migrating older versions when they exist.
pub fn extract_config(figment: &Figment) -> Result<ConfigV1, figment::Error> {
    match figment.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
}

/// Load config from "config.yaml" in the current directory, with `ELIDEUS_*` env overrides.
pub fn load_config() -> ConfigV1 {
    let figment = Figment::new()
        .merge(Yaml::file("./config.yaml"))
        .merge(Env::prefixed("ELIDEUS_").split("__"));
    match extract_config(&figment) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() -> Result<(), serde_json::Error> {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
