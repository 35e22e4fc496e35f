//! The landing page.

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};
use tracing::error;

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use crate::views::HomeView;

/// Registers the landing page on `/` and as the fallback for unknown paths.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .fallback(home)
}

/// Mounts a fresh home view for each request and renders it.
async fn home(State(state): State<AppState>) -> Result<Html<String>, HTTPError> {
    let mut view = HomeView::new(state.view_context(), &state.config.site);
    view.mount(state.version.as_ref()).await;
    view.render_html().map(Html).map_err(|e| {
        error!("Error rendering home view: {}", e);
        HTTPError::internal("Error rendering page")
    })
}
