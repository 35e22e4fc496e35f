//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! the version API, service identity, health checks and the landing page.

mod api_routes;
mod health_routes;
mod identity_routes;
mod web_routes;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
///
/// The landing page is also the fallback, so every unknown path renders it.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes::routes())
        .merge(identity_routes::routes())
        .merge(health_routes::routes())
        .merge(web_routes::routes())
        .with_state(state)
}
