//! Service identity discovery.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Registers the DID document route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/.well-known/did.json", get(did_document))
}

#[derive(Serialize)]
struct DidDocument {
    #[serde(rename = "@context")]
    context: Vec<&'static str>,
    id: String,
    service: Vec<DidService>,
}

#[derive(Serialize)]
struct DidService {
    id: &'static str,
    #[serde(rename = "type")]
    service_type: &'static str,
    #[serde(rename = "serviceEndpoint")]
    service_endpoint: String,
}

/// Serves the `did:web` document that identifies this host.
async fn did_document(State(state): State<AppState>) -> Json<DidDocument> {
    let site = &state.config.site;
    Json(DidDocument {
        context: vec!["http://www.w3.org/ns/did/v1"],
        id: site.service_did(),
        service: vec![DidService {
            id: "#bsky_fg",
            service_type: "BskyFeedGenerator",
            service_endpoint: format!("https://{}", site.hostname),
        }],
    })
}
