//! Application startup and server initialization.
//!
//! Builds the shared state (session context, theme, version client) and
//! serves the router on the configured address.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::routes;
use crate::session::create_session_context;
use crate::state::AppState;
use crate::version::VersionClient;
use crate::views::Theme;

/// Builds the application state from the configuration.
pub fn build_state(config: Arc<ConfigV1>) -> AppState {
    let session = create_session_context(&config.session);
    let version = Arc::new(VersionClient::new(&config.version_endpoint()));
    AppState {
        config,
        session,
        theme: Arc::new(Theme::default()),
        version,
    }
}

/// Initializes and runs the application server.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(config.clone());
    let app = routes::create_router(state);

    info!("Starting server on {}", config.bind_address);
    let listener = TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
