use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use elideus::config::{Config, ConfigV1, VersionEndpointConfig};
use elideus::routes::create_router;
use elideus::startup::build_state;
use elideus::state::AppState;
use figment::{
    providers::{Format, Yaml},
    Figment,
};

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
bind_address: "127.0.0.1:0"
site:
  hostname: elideus.net
  app_version: "0.0.1"
session:
  enabled: true
logging:
  level: "debug"
  format: "json"
"#;

/// Parses TEST_CONFIG, pointing the version endpoint at `version_url`.
pub fn test_config(version_url: &str) -> ConfigV1 {
    let figment = Figment::new().merge(Yaml::string(TEST_CONFIG));
    let Config::ConfigV1(mut config) = figment.extract::<Config>().expect("test config parses");
    config.version_endpoint = Some(VersionEndpointConfig {
        url: version_url.to_string(),
        timeout_in_ms: 500,
    });
    config
}

pub fn build_app(config: ConfigV1) -> (Router, AppState) {
    let state = build_state(Arc::new(config));
    (create_router(state.clone()), state)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}
