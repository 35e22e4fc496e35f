//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! configuration, the session context, the theme and the version source.

use crate::config::ConfigV1;
use crate::session::SessionContext;
use crate::version::VersionSource;
use crate::views::{Theme, ViewContext};
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// The process-wide session context handed to views.
    pub session: Arc<dyn SessionContext>,
    pub theme: Arc<Theme>,
    /// Where views fetch the version string from.
    pub version: Arc<dyn VersionSource>,
}

impl AppState {
    pub fn view_context(&self) -> ViewContext {
        ViewContext::new(self.session.clone(), self.theme.clone())
    }
}
