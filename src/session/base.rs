use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use super::{detached_session::DetachedSession, session_store::SessionStore};
use crate::config::SessionConfig;

/// The signed-in actor, represented only by its bearer token.
///
/// The token is opaque: it is never parsed, validated or expired here, and any
/// string (including the empty one) is accepted.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    bearer_token: String,
}

impl Session {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }

    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }
}

// Keep credentials out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Populated,
}

/// Capability interface for the current session, handed to every view that
/// needs session awareness.
///
/// Implementations hold at most one session; `replace` overwrites it entirely
/// and marks every subscriber as changed before returning.
pub trait SessionContext: Send + Sync {
    /// Returns the current session, if any.
    fn get(&self) -> Option<Session>;

    /// Replaces the current value unconditionally.
    fn replace(&self, session: Option<Session>);

    /// Returns an observer that always reads the latest value.
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;

    fn set(&self, session: Session) {
        self.replace(Some(session));
    }

    fn clear(&self) {
        self.replace(None);
    }

    fn state(&self) -> SessionState {
        match self.get() {
            Some(_) => SessionState::Populated,
            None => SessionState::Empty,
        }
    }

    fn is_attached(&self) -> bool {
        // Real contexts return true; DetachedSession returns false
        true
    }
}

/// Creates the session context described by the SessionConfig.
/// If `session.enabled = false`, returns DetachedSession.
pub fn create_session_context(config: &SessionConfig) -> Arc<dyn SessionContext> {
    if !config.enabled {
        info!("Session context is disabled. Using DetachedSession.");
        return Arc::new(DetachedSession::new());
    }
    info!("Using in-memory session store.");
    Arc::new(SessionStore::new())
}
