//! Backend endpoints under `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tracing::error;

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use crate::version::{probe_ffmpeg_version, VersionInfo};

/// Registers the API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/message", get(get_message))
        .route("/ffmpeg", get(get_ffmpeg))
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

/// Returns the configured site message.
async fn get_message(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.config.site.message.clone(),
    })
}

/// Reports the first line of `ffmpeg -version`.
async fn get_ffmpeg(State(state): State<AppState>) -> Result<Json<VersionInfo>, HTTPError> {
    match probe_ffmpeg_version(state.config.probe.binary.clone()).await {
        Ok(ffmpeg_version) => Ok(Json(VersionInfo { ffmpeg_version })),
        Err(e) => {
            error!("Error checking ffmpeg: {}", e);
            Err(HTTPError::internal(format!("Error checking ffmpeg: {}", e)))
        }
    }
}
